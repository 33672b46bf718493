//! # Leadflow Domain
//!
//! Business domain types and models for the prospect intake engine.
//!
//! This crate contains:
//! - Domain data types (ProspectRecord, AppointmentSlot, etc.)
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants and small parsing utilities
//!
//! ## Architecture
//! - No dependencies on other leadflow crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::{Config, DispatchConfig, IntakeConfig, SchedulingConfig, StoreConfig};
pub use errors::{LeadflowError, Result};
pub use types::{
    AppointmentSlot, Collaborator, EventRef, InboundItem, NotificationJob, ProspectRecord,
    RecordId, RecordStatus, RunSummary, TimeWindow,
};
// Re-export the availability-window grammar helpers
pub use utils::window::{parse_time_range, parse_windows};
