//! Launch progress port
//!
//! Defines the interface for reporting what the launcher is about to do.

use crate::ports::worker_spawner::WorkerHandle;
use launcher_domain::{PartyCount, WorkerCommand};
use std::io;

/// Callback for progress updates during a launch
///
/// Implementations live in the presentation layer. Callbacks fire in
/// launch order: `on_launch_start` once, then `on_worker_command` for every
/// party before that party is spawned. A report that cannot be written
/// aborts the launch before the next worker starts.
pub trait LaunchNotifier: Send + Sync {
    /// Called once the party count is known, before any worker is built
    fn on_launch_start(&self, count: PartyCount) -> io::Result<()>;

    /// Called with each worker's invocation, before it is executed
    fn on_worker_command(&self, command: &WorkerCommand) -> io::Result<()>;

    /// Called after the OS accepted a worker
    fn on_worker_spawned(&self, _handle: &WorkerHandle) {}
}

/// No-op notifier for when progress reporting is not needed
pub struct NoProgress;

impl LaunchNotifier for NoProgress {
    fn on_launch_start(&self, _count: PartyCount) -> io::Result<()> {
        Ok(())
    }

    fn on_worker_command(&self, _command: &WorkerCommand) -> io::Result<()> {
        Ok(())
    }
}
