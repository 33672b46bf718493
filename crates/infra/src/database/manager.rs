//! Connection pool and schema bootstrap for the record store

use std::path::Path;

use leadflow_domain::{LeadflowError, Result};
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use tracing::info;

use crate::errors::InfraError;

/// Column layout of the prospect store; order is fixed at creation and
/// matches `ProspectRecord::COLUMNS`.
const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS prospects (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    email TEXT NOT NULL,
    phone TEXT NOT NULL,
    address TEXT NOT NULL,
    city TEXT NOT NULL,
    postal_code TEXT NOT NULL,
    department TEXT NOT NULL,
    property_type TEXT NOT NULL,
    budget TEXT NOT NULL,
    financing TEXT NOT NULL,
    timeframe TEXT NOT NULL,
    sectors TEXT NOT NULL,
    new_build_interest TEXT NOT NULL,
    available_days TEXT NOT NULL,
    available_windows TEXT NOT NULL,
    received_at TEXT NOT NULL,
    status TEXT NOT NULL DEFAULT 'pending'
);";

const POOL_SIZE: u32 = 4;

/// Owns the pooled connection to the store file.
///
/// Opening the manager creates the database file (and its parent directory)
/// when absent, so a first run against a fresh path just works.
pub struct DatabaseManager {
    pool: Pool<SqliteConnectionManager>,
}

impl DatabaseManager {
    /// Open (or create) the store at the given path.
    ///
    /// # Errors
    /// Returns `LeadflowError::Database` when the file cannot be created or
    /// the schema cannot be applied; per the run contract this aborts the
    /// caller's run.
    pub fn new(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(InfraError::from)?;
            }
        }

        let manager = SqliteConnectionManager::file(path);
        let pool = Pool::builder()
            .max_size(POOL_SIZE)
            .build(manager)
            .map_err(|e| LeadflowError::Database(format!("failed to open store: {e}")))?;

        let db = Self { pool };
        db.init_schema()?;
        info!(path = %path.display(), "prospect store ready");

        Ok(db)
    }

    /// In-memory store, for tests and dry runs.
    pub fn in_memory() -> Result<Self> {
        let manager = SqliteConnectionManager::memory();
        let pool = Pool::builder()
            .max_size(1)
            .build(manager)
            .map_err(|e| LeadflowError::Database(format!("failed to open store: {e}")))?;

        let db = Self { pool };
        db.init_schema()?;
        Ok(db)
    }

    /// Borrow a pooled connection.
    pub fn get(&self) -> Result<PooledConnection<SqliteConnectionManager>> {
        self.pool.get().map_err(|e| InfraError::from(e).into())
    }

    fn init_schema(&self) -> Result<()> {
        let conn = self.get()?;
        conn.execute_batch(SCHEMA).map_err(InfraError::from)?;
        Ok(())
    }
}
