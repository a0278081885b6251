//! SketchKit Settings Crate
//!
//! Handles application configuration: drawing defaults, highlight styling and
//! where drawings are stored.

pub mod config;
pub mod error;

pub use config::{Config, DrawingSettings, StorageSettings};
pub use error::{SettingsError, SettingsResult};
