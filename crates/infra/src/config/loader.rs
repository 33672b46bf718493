//! Configuration loader
//!
//! Loads the engine configuration from a file, then applies environment
//! overrides.
//!
//! ## Loading Strategy
//! 1. Probes multiple paths for a config file (JSON or TOML)
//! 2. Falls back to built-in defaults when no file exists
//! 3. Applies `LEADFLOW_*` environment overrides on top
//!
//! ## Environment Variables
//! - `LEADFLOW_STORE_PATH`: Record store file path
//! - `LEADFLOW_TIMEZONE`: Business timezone (IANA name)
//! - `LEADFLOW_HANDLED_LABEL`: Mailbox label for handled items
//! - `LEADFLOW_MAX_DISPATCH_ATTEMPTS`: Dispatch retry budget
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./leadflow.json` or `./leadflow.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)

use std::path::{Path, PathBuf};

use leadflow_domain::{Config, LeadflowError, Result};

/// Load configuration with automatic fallback strategy.
///
/// # Errors
/// Returns `LeadflowError::Config` if a config file exists but cannot be
/// parsed, or an environment override has an invalid value.
pub fn load() -> Result<Config> {
    let mut config = match probe_config_paths() {
        Some(path) => load_from_file(Some(path))?,
        None => {
            tracing::debug!("no config file found, using defaults");
            Config::default()
        }
    };

    apply_env_overrides(&mut config)?;
    Ok(config)
}

/// Load configuration from a file.
///
/// If `path` is `None`, probes the standard locations. Supports both JSON
/// and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `LeadflowError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(LeadflowError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            LeadflowError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| LeadflowError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content; format is detected by file
/// extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| LeadflowError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| LeadflowError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(LeadflowError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe the standard locations for a configuration file.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend([
            cwd.join("config.json"),
            cwd.join("config.toml"),
            cwd.join("leadflow.json"),
            cwd.join("leadflow.toml"),
            cwd.join("../config.json"),
            cwd.join("../config.toml"),
        ]);
    }

    candidates.into_iter().find(|path| path.exists())
}

fn apply_env_overrides(config: &mut Config) -> Result<()> {
    if let Ok(path) = std::env::var("LEADFLOW_STORE_PATH") {
        config.store.path = path;
    }
    if let Ok(timezone) = std::env::var("LEADFLOW_TIMEZONE") {
        config.scheduling.timezone = timezone;
        // Fail now rather than at first slot allocation.
        config.scheduling.timezone()?;
    }
    if let Ok(label) = std::env::var("LEADFLOW_HANDLED_LABEL") {
        config.intake.handled_label = label;
    }
    if let Ok(raw) = std::env::var("LEADFLOW_MAX_DISPATCH_ATTEMPTS") {
        config.dispatch.max_attempts = raw.parse::<u32>().map_err(|e| {
            LeadflowError::Config(format!("Invalid LEADFLOW_MAX_DISPATCH_ATTEMPTS: {e}"))
        })?;
    }

    Ok(())
}
