//! Domain layer for party-launcher
//!
//! This crate contains the value objects that describe a launch:
//! how many parties a protocol run has, where each worker reads its input
//! and writes its log, and the exact invocation handed to the OS.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Party**: one worker process of the external protocol executable,
//!   identified by a [`PartyId`]
//! - **Scale (`l`)**: the protocol parameter read from the JSON config;
//!   a run has `4 * l` parties ([`PartyCount`])
//! - **Worker layout**: the fixed `worker_<id>` naming of per-worker
//!   input directories and log files ([`WorkerLayout`])

pub mod core;
pub mod party;
pub mod worker;

// Re-export commonly used types
pub use core::{
    error::DomainError,
    path::{PathKind, PathRole},
};
pub use party::{PARTIES_PER_SCALE, PartyCount, PartyId};
pub use worker::{
    command::{DEFAULT_WORKER_LOG_LEVEL, LOG_LEVEL_ENV, WorkerCommand},
    layout::WorkerLayout,
};
