//! Raw TOML settings data types
//!
//! These structs represent the exact structure of the settings file.

use launcher_application::LaunchSettings;
use launcher_domain::DEFAULT_WORKER_LOG_LEVEL;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Settings loading and validation errors
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Settings file '{}' does not exist", .0.display())]
    NotFound(PathBuf),

    #[error("Invalid settings: {0}")]
    Invalid(#[from] Box<figment::Error>),

    #[error("worker_log_level cannot be empty")]
    EmptyLogLevel,
}

/// Raw launcher settings from TOML / environment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSettings {
    /// `RUST_LOG` value handed to every worker
    pub worker_log_level: String,
    /// Directory for `worker_<id>.log` files (empty = working directory)
    pub log_dir: PathBuf,
}

impl Default for FileSettings {
    fn default() -> Self {
        Self {
            worker_log_level: DEFAULT_WORKER_LOG_LEVEL.to_string(),
            log_dir: PathBuf::new(),
        }
    }
}

impl FileSettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.worker_log_level.trim().is_empty() {
            return Err(SettingsError::EmptyLogLevel);
        }
        Ok(())
    }

    /// Validate and convert into application settings
    pub fn into_settings(self) -> Result<LaunchSettings, SettingsError> {
        self.validate()?;
        Ok(LaunchSettings::default()
            .with_worker_log_level(self.worker_log_level.trim())
            .with_log_dir(self.log_dir))
    }
}
