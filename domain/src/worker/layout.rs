//! Worker layout value object

use crate::party::PartyId;
use std::path::{Path, PathBuf};

/// Prefix shared by every per-worker input directory and log file
pub const WORKER_PREFIX: &str = "worker_";

/// Extension of per-worker log files
pub const LOG_EXTENSION: &str = "log";

/// Where each worker reads its input and writes its log (Value Object)
///
/// Both paths embed the party id with the fixed `worker_<id>` pattern, so
/// two distinct parties never share a directory or a log file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerLayout {
    input_root: PathBuf,
    log_dir: PathBuf,
}

impl WorkerLayout {
    /// Layout with logs written to the working directory
    pub fn new(input_root: impl Into<PathBuf>) -> Self {
        Self {
            input_root: input_root.into(),
            log_dir: PathBuf::new(),
        }
    }

    pub fn with_log_dir(mut self, log_dir: impl Into<PathBuf>) -> Self {
        self.log_dir = log_dir.into();
        self
    }

    pub fn input_root(&self) -> &Path {
        &self.input_root
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    /// `worker_<id>`
    pub fn worker_name(id: PartyId) -> String {
        format!("{}{}", WORKER_PREFIX, id)
    }

    /// `<input_root>/worker_<id>`
    pub fn input_dir(&self, id: PartyId) -> PathBuf {
        self.input_root.join(Self::worker_name(id))
    }

    /// `<log_dir>/worker_<id>.log`
    pub fn log_file(&self, id: PartyId) -> PathBuf {
        self.log_dir
            .join(format!("{}.{}", Self::worker_name(id), LOG_EXTENSION))
    }
}
