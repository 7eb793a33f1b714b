//! Application-level configuration.
//!
//! Settings that shape how workers are launched without being part of the
//! protocol configuration handed to them.

use launcher_domain::DEFAULT_WORKER_LOG_LEVEL;
use std::path::PathBuf;

/// Launcher behavior configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchSettings {
    /// Value of `RUST_LOG` in every worker's environment.
    pub worker_log_level: String,
    /// Directory receiving the `worker_<id>.log` files.
    ///
    /// Empty means the launcher's working directory.
    pub log_dir: PathBuf,
}

impl Default for LaunchSettings {
    fn default() -> Self {
        Self {
            worker_log_level: DEFAULT_WORKER_LOG_LEVEL.to_string(),
            log_dir: PathBuf::new(),
        }
    }
}

impl LaunchSettings {
    pub fn with_worker_log_level(mut self, level: impl Into<String>) -> Self {
        self.worker_log_level = level.into();
        self
    }

    pub fn with_log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = dir.into();
        self
    }
}
