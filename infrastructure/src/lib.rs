//! Infrastructure layer for party-launcher
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including launcher settings loading.

pub mod config;
pub mod process;
pub mod protocol;

// Re-export commonly used types
pub use config::{FileSettings, SettingsError, SettingsLoader};
pub use process::ProcessWorkerSpawner;
pub use protocol::JsonProtocolConfigReader;
