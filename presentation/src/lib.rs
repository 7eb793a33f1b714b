//! Presentation layer for party-launcher
//!
//! This crate contains CLI definitions, the audit line formatter and
//! the console progress reporter.

pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use output::console::ConsoleFormatter;
pub use progress::reporter::ConsoleReporter;
