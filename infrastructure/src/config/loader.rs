//! Settings file loader with multi-source merging

use super::file_config::{FileSettings, SettingsError};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Project-level settings file name
pub const PROJECT_SETTINGS_FILE: &str = "party-launcher.toml";

/// Prefix of environment variable overrides
pub const ENV_PREFIX: &str = "PARTY_LAUNCHER_";

/// Settings loader that handles file discovery and merging
pub struct SettingsLoader;

impl SettingsLoader {
    /// Load settings from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `PARTY_LAUNCHER_*` environment variables
    /// 2. Explicit settings path (if provided, must exist)
    /// 3. Project root: `./party-launcher.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/party-launcher/config.toml`
    /// 5. Default values
    pub fn load(settings_path: Option<&PathBuf>) -> Result<FileSettings, SettingsError> {
        let figment = Self::file_figment(
            Self::global_config_path().as_deref(),
            Path::new(PROJECT_SETTINGS_FILE),
            settings_path.map(PathBuf::as_path),
        )?
        .merge(Env::prefixed(ENV_PREFIX));

        figment.extract().map_err(|e| SettingsError::Invalid(Box::new(e)))
    }

    /// Load only default settings (for --no-settings)
    pub fn load_defaults() -> FileSettings {
        FileSettings::default()
    }

    /// Merge defaults and settings files, lowest priority first
    pub(crate) fn file_figment(
        global: Option<&Path>,
        project: &Path,
        explicit: Option<&Path>,
    ) -> Result<Figment, SettingsError> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileSettings::default()));

        if let Some(global_path) = global {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        if project.exists() {
            figment = figment.merge(Toml::file(project));
        }

        if let Some(path) = explicit {
            if !path.exists() {
                return Err(SettingsError::NotFound(path.to_path_buf()));
            }
            figment = figment.merge(Toml::file(path));
        }

        Ok(figment)
    }

    /// Get the global settings file path
    ///
    /// Returns XDG_CONFIG_HOME/party-launcher/config.toml if set,
    /// otherwise falls back to ~/.config/party-launcher/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("party-launcher").join("config.toml"))
    }
}
