//! Launch Parties use case
//!
//! Validates the launch paths, sizes the run from the protocol config and
//! starts one worker per party without waiting for any of them.

use crate::config::LaunchSettings;
use crate::ports::progress::{LaunchNotifier, NoProgress};
use crate::ports::protocol_config::{ConfigError, ProtocolConfigReader};
use crate::ports::worker_spawner::{SpawnError, WorkerHandle, WorkerSpawner};
use crate::use_cases::validate_paths::{InvalidPathError, LaunchPaths};
use launcher_domain::{DomainError, PartyCount, PartyId, WorkerCommand, WorkerLayout};
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that abort a launch
///
/// None of them trigger cleanup: workers started before the failure keep
/// running.
#[derive(Error, Debug)]
pub enum LaunchError {
    #[error(transparent)]
    InvalidPath(#[from] InvalidPathError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    PartyCount(#[from] DomainError),

    #[error("Failed to report launch progress: {0}")]
    Report(#[source] std::io::Error),

    #[error("Failed to launch party {id}: {source}")]
    Spawn {
        id: PartyId,
        #[source]
        source: SpawnError,
    },
}

/// Input for the LaunchParties use case
#[derive(Debug, Clone)]
pub struct LaunchInput {
    /// Shared JSON protocol configuration
    pub config: PathBuf,
    /// Worker executable
    pub executable: PathBuf,
    /// Directory holding the `worker_<id>` input subdirectories
    pub input_dir: PathBuf,
    pub settings: LaunchSettings,
    /// Report every command but start nothing
    pub dry_run: bool,
}

impl LaunchInput {
    pub fn new(
        config: impl Into<PathBuf>,
        executable: impl Into<PathBuf>,
        input_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            config: config.into(),
            executable: executable.into(),
            input_dir: input_dir.into(),
            settings: LaunchSettings::default(),
            dry_run: false,
        }
    }

    pub fn with_settings(mut self, settings: LaunchSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }
}

/// Outcome of a launch
#[derive(Debug, Clone)]
pub struct LaunchOutput {
    pub party_count: PartyCount,
    /// Every command built, in party order
    pub commands: Vec<WorkerCommand>,
    /// Started workers, in party order. Empty for a dry run.
    pub handles: Vec<WorkerHandle>,
}

/// Use case for launching every party of a protocol run
pub struct LaunchPartiesUseCase<R: ProtocolConfigReader + 'static, S: WorkerSpawner + 'static> {
    reader: Arc<R>,
    spawner: Arc<S>,
}

impl<R: ProtocolConfigReader + 'static, S: WorkerSpawner + 'static> LaunchPartiesUseCase<R, S> {
    pub fn new(reader: Arc<R>, spawner: Arc<S>) -> Self {
        Self { reader, spawner }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, input: LaunchInput) -> Result<LaunchOutput, LaunchError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: LaunchInput,
        progress: &dyn LaunchNotifier,
    ) -> Result<LaunchOutput, LaunchError> {
        let paths = LaunchPaths::validate(&input.config, &input.executable, &input.input_dir)?;

        let scale = self.reader.read_scale(paths.config()).await?;
        let party_count = PartyCount::from_scale(scale)?;

        info!("Running {} parties (l = {})", party_count, scale);
        progress
            .on_launch_start(party_count)
            .map_err(LaunchError::Report)?;

        let layout =
            WorkerLayout::new(paths.input_dir()).with_log_dir(&input.settings.log_dir);

        let capacity = party_count.value() as usize;
        let mut commands = Vec::with_capacity(capacity);
        let mut handles = Vec::with_capacity(if input.dry_run { 0 } else { capacity });

        for id in party_count.ids() {
            let command = WorkerCommand::new(
                id,
                paths.executable(),
                paths.config(),
                &layout,
                &input.settings.worker_log_level,
            );

            if !command.input_dir().is_dir() {
                warn!(
                    "Input directory '{}' for party {} does not exist",
                    command.input_dir().display(),
                    id
                );
            }

            progress
                .on_worker_command(&command)
                .map_err(LaunchError::Report)?;

            if input.dry_run {
                debug!("Dry run: not starting party {}", id);
            } else {
                let handle = self
                    .spawner
                    .spawn(&command)
                    .await
                    .map_err(|source| LaunchError::Spawn { id, source })?;
                debug!("Started {}", handle);
                progress.on_worker_spawned(&handle);
                handles.push(handle);
            }

            commands.push(command);
        }

        info!(
            "Launched {} of {} parties",
            handles.len(),
            party_count
        );

        Ok(LaunchOutput {
            party_count,
            commands,
            handles,
        })
    }
}
