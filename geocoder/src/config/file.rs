//! Configuration file handling for ~/.geocoder/config.ini.
//!
//! Loads and saves user configuration with sensible defaults.

use std::path::{Path, PathBuf};

use ini::Ini;
use thiserror::Error;

use super::defaults::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use super::settings::GeocoderConfig;

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] ini::Error),

    /// Config text is not valid INI
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] ini::ParseError),

    /// Failed to write config file
    #[error("Failed to write config file: {0}")]
    WriteError(String),

    /// Invalid configuration value
    #[error("Invalid configuration: {section}.{key} = '{value}' - {reason}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        reason: String,
    },

    /// Failed to create config directory
    #[error("Failed to create config directory: {0}")]
    DirectoryError(std::io::Error),
}

impl GeocoderConfig {
    /// Load configuration from the default path (~/.geocoder/config.ini).
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&config_file_path())
    }

    /// Load configuration from a specific path.
    ///
    /// If the file doesn't exist, returns defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path)?;
        super::parser::parse_ini(&ini)
    }

    /// Parse configuration from INI text.
    pub fn from_ini_str(content: &str) -> Result<Self, ConfigError> {
        let ini = Ini::load_from_str(content)?;
        super::parser::parse_ini(&ini)
    }

    /// Save configuration to the default path (~/.geocoder/config.ini).
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&config_file_path())
    }

    /// Save configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigError::DirectoryError)?;
        }

        let content = super::writer::to_config_string(self);
        std::fs::write(path, content).map_err(|e| ConfigError::WriteError(e.to_string()))
    }
}

/// Get the path to the config directory (~/.geocoder).
pub fn config_directory() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR_NAME)
}

/// Get the path to the config file (~/.geocoder/config.ini).
pub fn config_file_path() -> PathBuf {
    config_directory().join(CONFIG_FILE_NAME)
}
