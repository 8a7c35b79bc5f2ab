use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/stepca-console/config.toml` on Linux, or the
    /// platform equivalent via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("stepca-console").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - At least one key type and one duration unit are configured
    /// - The initial key type and unit are members of their lists
    /// - The renew duration is positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        let form = &self.form;

        if form.key_types.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "At least one key type must be configured".to_string(),
            });
        }

        if form.duration_units.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "At least one duration unit must be configured".to_string(),
            });
        }

        if !form.key_types.contains(&form.key_type) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "Key type '{}' not found in configured key types",
                    form.key_type
                ),
            });
        }

        if !form.duration_units.contains(&form.duration_unit) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "Duration unit '{}' not found in configured duration units",
                    form.duration_unit
                ),
            });
        }

        if self.submit.renew_duration_secs == 0 {
            return Err(ConfigError::ValidationError {
                message: "Renew duration must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}
