//! Launcher settings loading for party-launcher
//!
//! This module handles file I/O and merging of settings from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `PARTY_LAUNCHER_*` environment variables
//! 2. `--settings <path>` specified file
//! 3. Project root: `./party-launcher.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/party-launcher/config.toml`
//! 5. Default values
//!
//! These settings are about the launcher itself. The protocol configuration
//! handed to workers is read by [`crate::protocol`].

mod file_config;
mod loader;

pub use file_config::{FileSettings, SettingsError};
pub use loader::SettingsLoader;
