//! Error types for the settings crate.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading, writing or validating a config file.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Cannot read config {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("Cannot write config {path}: {source}")]
    Write { path: PathBuf, source: io::Error },

    #[error("Invalid setting '{key}': {reason}")]
    InvalidSetting { key: String, reason: String },

    /// The file extension is neither `.json` nor `.toml`.
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    /// No platform config directory, or it could not be created.
    #[error("Config directory error: {0}")]
    ConfigDirectory(String),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("TOML error: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),
}

impl SettingsError {
    pub fn invalid(key: impl Into<String>, reason: impl Into<String>) -> Self {
        SettingsError::InvalidSetting {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Name of the offending key, for validation failures.
    pub fn key(&self) -> Option<&str> {
        match self {
            SettingsError::InvalidSetting { key, .. } => Some(key),
            _ => None,
        }
    }
}

pub type SettingsResult<T> = Result<T, SettingsError>;
