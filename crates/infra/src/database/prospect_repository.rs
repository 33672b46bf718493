//! SQLite implementation of the ProspectStore port

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use leadflow_core::ProspectStore;
use leadflow_domain::{LeadflowError, ProspectRecord, RecordId, RecordStatus, Result};
use rusqlite::types::Type;
use rusqlite::{params, OptionalExtension, Row};
use tracing::{debug, instrument};

use super::manager::DatabaseManager;
use crate::errors::InfraError;

const SELECT_COLUMNS: &str = "id, first_name, last_name, email, phone, address, city, \
     postal_code, department, property_type, budget, financing, timeframe, sectors, \
     new_build_interest, available_days, available_windows, received_at, status";

/// SQLite adapter for the append-only prospect repository.
pub struct SqliteProspectStore {
    db: Arc<DatabaseManager>,
}

impl SqliteProspectStore {
    pub fn new(db: Arc<DatabaseManager>) -> Self {
        Self { db }
    }
}

fn map_record(row: &Row<'_>) -> rusqlite::Result<(RecordId, ProspectRecord)> {
    let received_raw: String = row.get(17)?;
    let received_at = DateTime::parse_from_rfc3339(&received_raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(17, Type::Text, Box::new(e)))?;

    let status_raw: String = row.get(18)?;
    let status = RecordStatus::parse(&status_raw).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            18,
            Type::Text,
            format!("unknown status marker: {status_raw}").into(),
        )
    })?;

    Ok((
        row.get(0)?,
        ProspectRecord {
            first_name: row.get(1)?,
            last_name: row.get(2)?,
            email: row.get(3)?,
            phone: row.get(4)?,
            address: row.get(5)?,
            city: row.get(6)?,
            postal_code: row.get(7)?,
            department: row.get(8)?,
            property_type: row.get(9)?,
            budget: row.get(10)?,
            financing: row.get(11)?,
            timeframe: row.get(12)?,
            sectors: row.get(13)?,
            new_build_interest: row.get(14)?,
            available_days: row.get(15)?,
            available_windows: row.get(16)?,
            received_at,
            status,
        },
    ))
}

impl SqliteProspectStore {
    fn select(&self, where_clause: &str) -> Result<Vec<(RecordId, ProspectRecord)>> {
        let conn = self.db.get()?;
        let sql =
            format!("SELECT {SELECT_COLUMNS} FROM prospects {where_clause} ORDER BY id ASC");
        let mut stmt = conn.prepare(&sql).map_err(InfraError::from)?;

        let rows = stmt
            .query_map([], map_record)
            .map_err(InfraError::from)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(InfraError::from)?;

        Ok(rows)
    }
}

#[async_trait]
impl ProspectStore for SqliteProspectStore {
    #[instrument(skip(self, record))]
    async fn append(&self, record: &ProspectRecord) -> Result<RecordId> {
        let conn = self.db.get()?;

        conn.execute(
            "INSERT INTO prospects (
                first_name, last_name, email, phone, address, city, postal_code,
                department, property_type, budget, financing, timeframe, sectors,
                new_build_interest, available_days, available_windows, received_at, status
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18)",
            params![
                record.first_name,
                record.last_name,
                record.email,
                record.phone,
                record.address,
                record.city,
                record.postal_code,
                record.department,
                record.property_type,
                record.budget,
                record.financing,
                record.timeframe,
                record.sectors,
                record.new_build_interest,
                record.available_days,
                record.available_windows,
                record.received_at.to_rfc3339(),
                record.status.as_str(),
            ],
        )
        .map_err(InfraError::from)?;

        let id = conn.last_insert_rowid();
        debug!(record_id = id, "appended prospect record");
        Ok(id)
    }

    #[instrument(skip(self))]
    async fn mark_processed(&self, id: RecordId) -> Result<bool> {
        let conn = self.db.get()?;

        let status: Option<String> = conn
            .query_row("SELECT status FROM prospects WHERE id = ?1", [id], |row| row.get(0))
            .optional()
            .map_err(InfraError::from)?;

        let Some(status) = status else {
            return Err(LeadflowError::NotFound(format!("prospect record {id}")));
        };

        if status == RecordStatus::Processed.as_str() {
            return Ok(false);
        }

        conn.execute(
            "UPDATE prospects SET status = ?1 WHERE id = ?2",
            params![RecordStatus::Processed.as_str(), id],
        )
        .map_err(InfraError::from)?;

        debug!(record_id = id, "marked prospect record processed");
        Ok(true)
    }

    async fn all(&self) -> Result<Vec<(RecordId, ProspectRecord)>> {
        self.select("")
    }

    async fn unprocessed(&self) -> Result<Vec<(RecordId, ProspectRecord)>> {
        self.select("WHERE status = 'pending'")
    }
}
