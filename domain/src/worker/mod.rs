//! Per-worker filesystem layout and invocation.

pub mod command;
pub mod layout;
