//! ScaleKit Settings Crate
//!
//! Overlay configuration, validation and persistence.

pub mod config;
pub mod error;
pub mod persistence;

pub use config::{Config, ConfigFormat, OverlaySettings, StyleSettings};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
pub use persistence::{default_config_path, SettingsPersistence};
