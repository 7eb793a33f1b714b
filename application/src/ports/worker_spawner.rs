//! Worker spawner port
//!
//! Defines how a built [`WorkerCommand`] becomes a running OS process.

use async_trait::async_trait;
use launcher_domain::{PartyId, WorkerCommand};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Errors reported synchronously while starting a worker
#[derive(Error, Debug)]
pub enum SpawnError {
    #[error("Cannot open log file '{}': {source}", .path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot start '{}': {source}", .program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Opaque record of a started worker
///
/// Holds no process handle: the worker is never waited on or signalled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerHandle {
    pub id: PartyId,
    /// OS process id, if the platform reported one
    pub pid: Option<u32>,
}

impl fmt::Display for WorkerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.pid {
            Some(pid) => write!(f, "worker {} (pid {})", self.id, pid),
            None => write!(f, "worker {}", self.id),
        }
    }
}

/// Starts workers without waiting for them
///
/// Implementations must return as soon as the OS accepted the process.
/// Exit status, startup confirmation and retries are out of their remit.
#[async_trait]
pub trait WorkerSpawner: Send + Sync {
    async fn spawn(&self, command: &WorkerCommand) -> Result<WorkerHandle, SpawnError>;
}
