//! Common data types used throughout the application

use chrono::{DateTime, NaiveDateTime, NaiveTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Identifier assigned by the record store on append.
///
/// Monotonically increasing within one store; append order is preserved.
pub type RecordId = i64;

/// A raw mailbox message awaiting structured processing.
///
/// Owned by the external mailbox collaborator; the core only reads it and
/// requests a handled-state transition by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboundItem {
    pub id: String,
    pub sender: String,
    pub subject: String,
    pub body: String,
    pub unread: bool,
}

/// Processing state of a stored prospect record.
///
/// Pending records are picked up by the scheduling pipeline; the only legal
/// transition is `Pending -> Processed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordStatus {
    Pending,
    Processed,
}

impl RecordStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processed => "processed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "processed" => Some(Self::Processed),
            _ => None,
        }
    }
}

/// Structured outcome of parsing one inbound item.
///
/// Every extracted field defaults to the empty string when its pattern does
/// not match; absence is data, not an error. Created once per accepted item
/// and mutated only to flip `status` to `Processed`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProspectRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub department: String,
    pub property_type: String,
    pub budget: String,
    pub financing: String,
    pub timeframe: String,
    pub sectors: String,
    pub new_build_interest: String,
    pub available_days: String,
    pub available_windows: String,
    pub received_at: DateTime<Utc>,
    pub status: RecordStatus,
}

impl ProspectRecord {
    /// Column order of the persisted layout; fixed after first creation.
    pub const COLUMNS: [&'static str; 18] = [
        "first_name",
        "last_name",
        "email",
        "phone",
        "address",
        "city",
        "postal_code",
        "department",
        "property_type",
        "budget",
        "financing",
        "timeframe",
        "sectors",
        "new_build_interest",
        "available_days",
        "available_windows",
        "received_at",
        "status",
    ];

    /// An empty record stamped with the given intake time.
    pub fn new(received_at: DateTime<Utc>) -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            address: String::new(),
            city: String::new(),
            postal_code: String::new(),
            department: String::new(),
            property_type: String::new(),
            budget: String::new(),
            financing: String::new(),
            timeframe: String::new(),
            sectors: String::new(),
            new_build_interest: String::new(),
            available_days: String::new(),
            available_windows: String::new(),
            received_at,
            status: RecordStatus::Pending,
        }
    }

    /// Display name used in event summaries and folder names.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }

    pub fn is_processed(&self) -> bool {
        self.status == RecordStatus::Processed
    }
}

/// One availability window parsed from the `"HH:MM-HH:MM"` grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

/// A concrete appointment interval in the business timezone.
///
/// Invariant: `end - start` equals the configured call duration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppointmentSlot {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub timezone: Tz,
}

/// Appointment counterpart and notification sender, picked from a fixed
/// roster by the assignment policy. Immutable for the run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collaborator {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl Collaborator {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }
}

/// One outbound message attempt.
///
/// Ephemeral; exists only for the duration of a dispatch attempt chain.
/// Retry accounting lives in the dispatcher outcome, not here.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationJob {
    pub sender: String,
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

/// Opaque handle returned by the calendar collaborator for a created event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRef(pub String);

/// Per-run counters; the run's only direct output besides collaborator side
/// effects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub accepted: u32,
    pub skipped: u32,
    pub failed: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_record_has_all_fields_blank_and_pending() {
        let record = ProspectRecord::new(Utc::now());
        assert!(record.first_name.is_empty());
        assert!(record.available_windows.is_empty());
        assert_eq!(record.status, RecordStatus::Pending);
        assert!(!record.is_processed());
    }

    #[test]
    fn full_name_trims_missing_parts() {
        let mut record = ProspectRecord::new(Utc::now());
        record.first_name = "Jean".to_string();
        assert_eq!(record.full_name(), "Jean");

        record.last_name = "Dupont".to_string();
        assert_eq!(record.full_name(), "Jean Dupont");
    }

    #[test]
    fn record_status_round_trips_through_marker() {
        assert_eq!(RecordStatus::parse("pending"), Some(RecordStatus::Pending));
        assert_eq!(RecordStatus::parse("processed"), Some(RecordStatus::Processed));
        assert_eq!(RecordStatus::parse("✔️"), None);
        assert_eq!(RecordStatus::Processed.as_str(), "processed");
    }
}
