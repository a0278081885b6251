//! Configuration and settings management for SketchKit
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats stored in platform-specific directories.
//!
//! Configuration is organized into sections:
//! - Drawing defaults (color, paste offset, stroke and highlight styling)
//! - Storage (drawings directory, default slot)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{SettingsError, SettingsResult};

const APP_DIR: &str = "sketchkit";
const CONFIG_FILE: &str = "config.toml";

/// Drawing defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawingSettings {
    /// Color given to new shapes
    pub default_color: String,
    /// Paste displacement on both axes
    pub paste_offset: f64,
    /// Stroke width for shapes
    pub stroke_width: f64,
    /// Stroke color of the selection overlay
    pub highlight_color: String,
    /// Stroke width of the selection overlay
    pub highlight_width: f64,
}

impl Default for DrawingSettings {
    fn default() -> Self {
        Self {
            default_color: "#000000".to_string(),
            paste_offset: 10.0,
            stroke_width: 2.0,
            highlight_color: "blue".to_string(),
            highlight_width: 3.0,
        }
    }
}

/// Where drawings are kept
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Directory holding one file per slot
    pub drawings_dir: PathBuf,
    /// Slot used when none is named
    pub default_slot: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        Self {
            drawings_dir: base.join(APP_DIR).join("drawings"),
            default_slot: "drawing".to_string(),
        }
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Drawing defaults
    pub drawing: DrawingSettings,
    /// Storage settings
    pub storage: StorageSettings,
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> SettingsResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(SettingsError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform config location, e.g. `~/.config/sketchkit/config.toml`.
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no configuration directory on this platform".into())
            })
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)
            .map_err(|source| SettingsError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Save config to file (JSON or TOML), creating parent directories
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| SettingsError::ConfigDirectory(format!("{}: {}", parent.display(), e)))?;
        }
        std::fs::write(path, content)
            .map_err(|source| SettingsError::Write {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(())
    }

    /// Loads `path` if it exists, otherwise returns defaults.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        validate_color("drawing.default_color", &self.drawing.default_color)?;
        validate_color("drawing.highlight_color", &self.drawing.highlight_color)?;

        if !self.drawing.paste_offset.is_finite() {
            return Err(SettingsError::invalid(
                "drawing.paste_offset",
                "must be a finite number",
            ));
        }
        if !(self.drawing.stroke_width.is_finite() && self.drawing.stroke_width > 0.0) {
            return Err(SettingsError::invalid(
                "drawing.stroke_width",
                "must be > 0",
            ));
        }
        if !(self.drawing.highlight_width.is_finite() && self.drawing.highlight_width > 0.0) {
            return Err(SettingsError::invalid(
                "drawing.highlight_width",
                "must be > 0",
            ));
        }

        if self.storage.drawings_dir.as_os_str().is_empty() {
            return Err(SettingsError::invalid(
                "storage.drawings_dir",
                "must not be empty",
            ));
        }
        let slot = &self.storage.default_slot;
        if slot.is_empty()
            || !slot
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(SettingsError::invalid(
                "storage.default_slot",
                "use letters, digits, '-' or '_'",
            ));
        }

        Ok(())
    }
}

/// Accepts `#rgb`, `#rrggbb`, or a bare color name.
fn validate_color(key: &str, color: &str) -> SettingsResult<()> {
    if color.is_empty() {
        return Err(SettingsError::invalid(key, "must not be empty"));
    }
    if let Some(hex) = color.strip_prefix('#') {
        let valid = matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit());
        if !valid {
            return Err(SettingsError::invalid(key, "not a #rgb or #rrggbb color"));
        }
    } else if !color.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(SettingsError::invalid(key, "not a color name"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::new();
        assert!(config.validate().is_ok());
        assert_eq!(config.drawing.paste_offset, 10.0);
        assert_eq!(config.storage.default_slot, "drawing");
        assert!(config.storage.drawings_dir.ends_with("sketchkit/drawings"));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::new();
        config.drawing.stroke_width = 0.0;
        assert!(matches!(
            config.validate(),
            Err(SettingsError::InvalidSetting { .. })
        ));

        let mut config = Config::new();
        config.drawing.default_color = "#12345".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::new();
        config.storage.default_slot = "../up".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::new();
        config.drawing.paste_offset = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_color_forms() {
        assert!(validate_color("c", "#fff").is_ok());
        assert!(validate_color("c", "#A0b1C2").is_ok());
        assert!(validate_color("c", "red").is_ok());
        assert!(validate_color("c", "").is_err());
        assert!(validate_color("c", "#ggg").is_err());
        assert!(validate_color("c", "rgb(1,2,3)").is_err());
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = Config::load_from_file(Path::new("/nonexistent/sketchkit/config.toml"))
            .unwrap_err();
        assert!(matches!(err, SettingsError::Read { ref path, .. } if path.ends_with("config.toml")));
    }

    #[test]
    fn test_unsupported_extension() {
        let err = Config::new()
            .save_to_file(Path::new("config.yaml"))
            .unwrap_err();
        assert!(matches!(err, SettingsError::UnsupportedFormat(ref ext) if ext == "yaml"));
    }
}
