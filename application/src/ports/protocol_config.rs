//! Protocol configuration port
//!
//! Defines how the launcher obtains the scale parameter from the shared
//! protocol configuration file.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the scale parameter in the protocol configuration
pub const SCALE_FIELD: &str = "l";

/// Errors that can occur while reading the protocol configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config '{}': {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error("Config is missing required field '{field}'")]
    MissingField { field: &'static str },

    #[error("Config field '{field}' must be an integer, got {value}")]
    NotAnInteger { field: &'static str, value: String },

    #[error("Config field '{field}' must not be negative, got {value}")]
    Negative { field: &'static str, value: i64 },
}

/// Source of the protocol's scale parameter
///
/// The file itself is never rewritten; workers receive its path unchanged.
#[async_trait]
pub trait ProtocolConfigReader: Send + Sync {
    /// Read the non-negative scale parameter `l` from the file at `path`
    async fn read_scale(&self, path: &Path) -> Result<u64, ConfigError>;
}
