//! Application layer for party-launcher
//!
//! This crate contains the launch use case, port definitions, and
//! launcher settings. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::LaunchSettings;
pub use ports::{
    progress::{LaunchNotifier, NoProgress},
    protocol_config::{ConfigError, ProtocolConfigReader, SCALE_FIELD},
    worker_spawner::{SpawnError, WorkerHandle, WorkerSpawner},
};
pub use use_cases::launch_parties::{
    LaunchError, LaunchInput, LaunchOutput, LaunchPartiesUseCase,
};
pub use use_cases::validate_paths::{InvalidPathError, LaunchPaths};
