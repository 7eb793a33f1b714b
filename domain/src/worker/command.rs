//! Worker command entity
//!
//! The complete invocation of one worker: program, argument vector,
//! environment and the log file its output goes to. Commands are executed
//! directly, never through a shell.

use crate::party::PartyId;
use crate::worker::layout::WorkerLayout;
use std::collections::BTreeMap;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Environment variable carrying the worker's log level
pub const LOG_LEVEL_ENV: &str = "RUST_LOG";

/// Log level handed to workers unless configured otherwise
pub const DEFAULT_WORKER_LOG_LEVEL: &str = "info";

/// Invocation of a single worker process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerCommand {
    id: PartyId,
    program: PathBuf,
    args: Vec<OsString>,
    env: BTreeMap<String, String>,
    input_dir: PathBuf,
    log_file: PathBuf,
}

impl WorkerCommand {
    /// Build the invocation for party `id`.
    ///
    /// Arguments are `--id <id> -c <config> -i <input_root>/worker_<id>`.
    pub fn new(
        id: PartyId,
        program: &Path,
        config: &Path,
        layout: &WorkerLayout,
        log_level: &str,
    ) -> Self {
        let input_dir = layout.input_dir(id);
        let args = vec![
            OsString::from("--id"),
            OsString::from(id.to_string()),
            OsString::from("-c"),
            config.as_os_str().to_owned(),
            OsString::from("-i"),
            input_dir.as_os_str().to_owned(),
        ];

        let mut env = BTreeMap::new();
        env.insert(LOG_LEVEL_ENV.to_string(), log_level.to_string());

        Self {
            id,
            program: program.to_path_buf(),
            args,
            env,
            input_dir,
            log_file: layout.log_file(id),
        }
    }

    pub fn id(&self) -> PartyId {
        self.id
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn args(&self) -> impl Iterator<Item = &OsStr> {
        self.args.iter().map(OsString::as_os_str)
    }

    /// Variables set on top of the launcher's own environment
    pub fn env(&self) -> &BTreeMap<String, String> {
        &self.env
    }

    pub fn input_dir(&self) -> &Path {
        &self.input_dir
    }

    /// Destination of both stdout and stderr
    pub fn log_file(&self) -> &Path {
        &self.log_file
    }
}
