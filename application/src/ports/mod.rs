//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation
//! adapters must implement.

pub mod progress;
pub mod protocol_config;
pub mod worker_spawner;
