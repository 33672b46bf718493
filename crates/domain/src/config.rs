//! Configuration structures
//!
//! Plain serde-derived configuration consumed by the engine. Every section
//! and field carries a default so a partial config file (or none at all)
//! still yields a runnable configuration.

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CALL_DURATION_MIN, DEFAULT_CLOSE_HOUR, DEFAULT_DISPATCH_BASE_DELAY_MS,
    DEFAULT_DISPATCH_MAX_DELAY_MS, DEFAULT_EXCLUDED_SUBJECT_TERMS, DEFAULT_HANDLED_LABEL,
    DEFAULT_INTERNAL_DOMAINS, DEFAULT_LUNCH_HOUR, DEFAULT_LUNCH_RESUME_HOUR,
    DEFAULT_MAX_ADVANCES, DEFAULT_MAX_DISPATCH_ATTEMPTS, DEFAULT_OPEN_HOUR, DEFAULT_STORE_PATH,
    DEFAULT_TIMEZONE,
};
use crate::errors::{LeadflowError, Result};
use crate::types::Collaborator;

/// Top-level configuration for one intake run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub scheduling: SchedulingConfig,
    #[serde(default)]
    pub dispatch: DispatchConfig,
    #[serde(default)]
    pub intake: IntakeConfig,
}

/// Record store location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_store_path")]
    pub path: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { path: default_store_path() }
    }
}

/// Business-hours and slot-search parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulingConfig {
    /// Fixed appointment length in minutes; also the advance increment.
    #[serde(default = "default_call_duration_min")]
    pub call_duration_min: u32,
    /// Hour the business day opens after a rollover.
    #[serde(default = "default_open_hour")]
    pub open_hour: u32,
    /// Hour past which the search rolls over to the next day.
    #[serde(default = "default_close_hour")]
    pub close_hour: u32,
    /// Advancing onto this exact hour skips to the resumption hour.
    #[serde(default = "default_lunch_hour")]
    pub lunch_hour: u32,
    #[serde(default = "default_lunch_resume_hour")]
    pub lunch_resume_hour: u32,
    /// Advance budget for each candidate window's search.
    #[serde(default = "default_max_advances")]
    pub max_advances: u32,
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

impl Default for SchedulingConfig {
    fn default() -> Self {
        Self {
            call_duration_min: default_call_duration_min(),
            open_hour: default_open_hour(),
            close_hour: default_close_hour(),
            lunch_hour: default_lunch_hour(),
            lunch_resume_hour: default_lunch_resume_hour(),
            max_advances: default_max_advances(),
            timezone: default_timezone(),
        }
    }
}

impl SchedulingConfig {
    /// Resolve the configured timezone name.
    ///
    /// # Errors
    /// Returns `LeadflowError::Config` when the name is not a valid IANA
    /// timezone identifier.
    pub fn timezone(&self) -> Result<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|e| LeadflowError::Config(format!("Invalid timezone: {e}")))
    }
}

/// Outbound notification retry policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchConfig {
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// First retry delay; doubles on every further attempt.
    #[serde(default = "default_base_delay_ms")]
    pub base_delay_ms: u64,
    #[serde(default = "default_max_delay_ms")]
    pub max_delay_ms: u64,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            base_delay_ms: default_base_delay_ms(),
            max_delay_ms: default_max_delay_ms(),
        }
    }
}

/// Inbound filtering and collaborator roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntakeConfig {
    /// Items whose subject contains one of these terms are skipped.
    #[serde(default = "default_excluded_subject_terms")]
    pub excluded_subject_terms: Vec<String>,
    /// Items whose sender matches one of these domains are skipped.
    #[serde(default = "default_internal_domains")]
    pub internal_domains: Vec<String>,
    /// Mailbox label applied once a record is durably stored.
    #[serde(default = "default_handled_label")]
    pub handled_label: String,
    #[serde(default)]
    pub collaborators: Vec<Collaborator>,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            excluded_subject_terms: default_excluded_subject_terms(),
            internal_domains: default_internal_domains(),
            handled_label: default_handled_label(),
            collaborators: Vec::new(),
        }
    }
}

fn default_store_path() -> String {
    DEFAULT_STORE_PATH.to_string()
}

fn default_call_duration_min() -> u32 {
    DEFAULT_CALL_DURATION_MIN
}

fn default_open_hour() -> u32 {
    DEFAULT_OPEN_HOUR
}

fn default_close_hour() -> u32 {
    DEFAULT_CLOSE_HOUR
}

fn default_lunch_hour() -> u32 {
    DEFAULT_LUNCH_HOUR
}

fn default_lunch_resume_hour() -> u32 {
    DEFAULT_LUNCH_RESUME_HOUR
}

fn default_max_advances() -> u32 {
    DEFAULT_MAX_ADVANCES
}

fn default_timezone() -> String {
    DEFAULT_TIMEZONE.to_string()
}

fn default_max_attempts() -> u32 {
    DEFAULT_MAX_DISPATCH_ATTEMPTS
}

fn default_base_delay_ms() -> u64 {
    DEFAULT_DISPATCH_BASE_DELAY_MS
}

fn default_max_delay_ms() -> u64 {
    DEFAULT_DISPATCH_MAX_DELAY_MS
}

fn default_excluded_subject_terms() -> Vec<String> {
    DEFAULT_EXCLUDED_SUBJECT_TERMS.iter().map(|s| (*s).to_string()).collect()
}

fn default_internal_domains() -> Vec<String> {
    DEFAULT_INTERNAL_DOMAINS.iter().map(|s| (*s).to_string()).collect()
}

fn default_handled_label() -> String {
    DEFAULT_HANDLED_LABEL.to_string()
}
