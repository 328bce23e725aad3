//! User configuration
//!
//! Stored as TOML at `<config dir>/autosave/config.toml`, or wherever
//! `AUTOSAVE_CONFIG` points. A missing file means defaults.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "AUTOSAVE_CONFIG";

/// Default quiet period before a save fires
pub const DEFAULT_DELAY_MS: u64 = 1000;

const MIN_DELAY_MS: u64 = 1;
const MAX_DELAY_MS: u64 = 60_000;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutosaveConfig {
    pub debounce: DebounceConfig,
    pub store: StoreConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebounceConfig {
    /// Quiet period in milliseconds
    pub delay_ms: u64,
}

impl DebounceConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_DELAY_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Directory of the sled database
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(".autosave"),
        }
    }
}

impl AutosaveConfig {
    /// Check value ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        let delay = self.debounce.delay_ms;
        if !(MIN_DELAY_MS..=MAX_DELAY_MS).contains(&delay) {
            return Err(ConfigError::Invalid(format!(
                "debounce.delay_ms must be between {} and {} (got {})",
                MIN_DELAY_MS, MAX_DELAY_MS, delay
            )));
        }
        if self.store.path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("store.path must not be empty".to_string()));
        }
        Ok(())
    }

    /// Read and validate a config file; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate and write to a config file, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Location of the user config file
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return Ok(PathBuf::from(path));
    }
    dirs::config_dir()
        .map(|dir| dir.join("autosave").join("config.toml"))
        .ok_or(ConfigError::NoConfigDir)
}

/// Load the user config file
pub fn load() -> Result<AutosaveConfig, ConfigError> {
    AutosaveConfig::load_from(&config_file_path()?)
}

/// Save the user config file
pub fn save(config: &AutosaveConfig) -> Result<(), ConfigError> {
    config.save_to(&config_file_path()?)
}

/// Write a default config file if none exists yet
pub fn init_if_missing() -> Result<PathBuf, ConfigError> {
    let path = config_file_path()?;
    if !path.exists() {
        AutosaveConfig::default().save_to(&path)?;
    }
    Ok(path)
}

/// Annotated example configuration
pub fn example_config() -> &'static str {
    r#"# autosave configuration

[debounce]
# Quiet period in milliseconds before an edit is saved (1-60000)
delay_ms = 1000

[store]
# Directory of the project database
path = ".autosave"
"#
}
