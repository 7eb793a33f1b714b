//! Fire-and-forget worker spawner
//!
//! Starts each worker as a direct child process with stdout and stderr both
//! redirected to its log file. The child handle is dropped right away:
//! workers outlive the launcher and are never waited on.

use async_trait::async_trait;
use launcher_application::{SpawnError, WorkerHandle, WorkerSpawner};
use launcher_domain::WorkerCommand;
use std::process::Stdio;
use tokio::fs::File;
use tokio::process::Command;
use tracing::debug;

/// Spawns workers as detached OS processes
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessWorkerSpawner;

impl ProcessWorkerSpawner {
    pub fn new() -> Self {
        Self
    }

    /// Create (or truncate) the log file and split it into stdout/stderr handles
    async fn open_log(command: &WorkerCommand) -> Result<(Stdio, Stdio), SpawnError> {
        let log_error = |source: std::io::Error| SpawnError::LogFile {
            path: command.log_file().to_path_buf(),
            source,
        };

        let log = File::create(command.log_file()).await.map_err(log_error)?;
        let stderr = log.try_clone().await.map_err(log_error)?;

        Ok((
            Stdio::from(log.into_std().await),
            Stdio::from(stderr.into_std().await),
        ))
    }
}

#[async_trait]
impl WorkerSpawner for ProcessWorkerSpawner {
    async fn spawn(&self, command: &WorkerCommand) -> Result<WorkerHandle, SpawnError> {
        let (stdout, stderr) = Self::open_log(command).await?;

        let child = Command::new(command.program())
            .args(command.args())
            .envs(command.env())
            .stdin(Stdio::null())
            .stdout(stdout)
            .stderr(stderr)
            .kill_on_drop(false)
            .spawn()
            .map_err(|source| SpawnError::Spawn {
                program: command.program().to_path_buf(),
                source,
            })?;

        let handle = WorkerHandle {
            id: command.id(),
            pid: child.id(),
        };
        debug!(
            "Spawned {} logging to '{}'",
            handle,
            command.log_file().display()
        );

        // Dropping the child detaches it; tokio reaps it if it exits while we run.
        drop(child);
        Ok(handle)
    }
}
