//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Appointment scheduling defaults
pub const DEFAULT_CALL_DURATION_MIN: u32 = 30;
pub const DEFAULT_OPEN_HOUR: u32 = 10;
pub const DEFAULT_CLOSE_HOUR: u32 = 19;
pub const DEFAULT_LUNCH_HOUR: u32 = 12;
pub const DEFAULT_LUNCH_RESUME_HOUR: u32 = 13;
pub const DEFAULT_MAX_ADVANCES: u32 = 256;
pub const DEFAULT_TIMEZONE: &str = "Europe/Paris";

// Availability-window grammar fallback ("HH:MM-HH:MM")
pub const DEFAULT_WINDOW: &str = "10:00-10:30";

// Outbound dispatch retry policy
pub const DEFAULT_MAX_DISPATCH_ATTEMPTS: u32 = 5;
pub const DEFAULT_DISPATCH_BASE_DELAY_MS: u64 = 2_000;
pub const DEFAULT_DISPATCH_MAX_DELAY_MS: u64 = 60_000;

// Intake filtering
pub const DEFAULT_EXCLUDED_SUBJECT_TERMS: [&str; 2] = ["confirmation", "invitation"];
pub const DEFAULT_INTERNAL_DOMAINS: [&str; 1] = ["calendar.google.com"];

// Label applied to mailbox items once their record is durably stored
pub const DEFAULT_HANDLED_LABEL: &str = "Traité";

// Record store defaults
pub const DEFAULT_STORE_PATH: &str = "prospects.db";
