//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod launch_parties;
pub mod validate_paths;
