//! Configuration for the scale overlay.
//!
//! Supports JSON and TOML files, selected by extension. Configuration is
//! organized into two sections:
//! - Overlay settings (tick lengths, ruler length axis, startup visibility)
//! - Style settings (colour, line width, dash pattern, shadow)

use scalekit_overlay::geometry::{DEFAULT_MAJOR_TICK_LENGTH, DEFAULT_MINOR_TICK_LENGTH};
use scalekit_overlay::style::{DEFAULT_COLOR, DEFAULT_LINE_WIDTH};
use scalekit_overlay::{LengthAxis, OverlayConfig, OverlayStyle, ShadowStyle, TickConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ConfigError, ConfigResult, SettingsError, SettingsResult};

/// On-disk encoding of a config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    /// Pick the format from the file extension.
    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

/// Geometry-related overlay settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlaySettings {
    /// Minor tick length in canvas units
    pub minor_tick_length: f64,
    /// Major tick length in canvas units
    pub major_tick_length: f64,
    /// Spacing that sets the horizontal ruler's canvas length
    pub length_axis: LengthAxis,
    /// Enable the tool as soon as it is attached
    pub enabled_on_startup: bool,
}

impl Default for OverlaySettings {
    fn default() -> Self {
        Self {
            minor_tick_length: DEFAULT_MINOR_TICK_LENGTH,
            major_tick_length: DEFAULT_MAJOR_TICK_LENGTH,
            length_axis: LengthAxis::default(),
            enabled_on_startup: false,
        }
    }
}

/// Drawing style settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleSettings {
    pub color: String,
    pub line_width: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_dash: Option<Vec<f64>>,
    pub shadow: ShadowStyle,
}

impl Default for StyleSettings {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR.to_string(),
            line_width: DEFAULT_LINE_WIDTH,
            line_dash: None,
            shadow: ShadowStyle::default(),
        }
    }
}

/// Complete overlay configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub overlay: OverlaySettings,
    pub style: StyleSettings,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;

        let config = Self::parse(&content, format)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded overlay config");
        Ok(config)
    }

    /// Parse config text in the given format without validating it.
    pub fn parse(content: &str, format: ConfigFormat) -> SettingsResult<Self> {
        let config = match format {
            ConfigFormat::Json => serde_json::from_str(content)?,
            ConfigFormat::Toml => toml::from_str(content)?,
        };
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        let content = self.render(ConfigFormat::from_path(path)?)?;

        std::fs::write(path, content).map_err(|e| {
            SettingsError::SaveError(format!("{}: {}", path.display(), e))
        })?;
        tracing::debug!(path = %path.display(), "saved overlay config");
        Ok(())
    }

    /// Serialize the config in the given format.
    pub fn render(&self, format: ConfigFormat) -> SettingsResult<String> {
        let content = match format {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };
        Ok(content)
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        let overlay = &self.overlay;
        if !is_positive(overlay.minor_tick_length) {
            return Err(ConfigError::out_of_range(
                "overlay.minor_tick_length",
                overlay.minor_tick_length,
            ));
        }
        if !is_positive(overlay.major_tick_length) {
            return Err(ConfigError::out_of_range(
                "overlay.major_tick_length",
                overlay.major_tick_length,
            ));
        }
        if overlay.minor_tick_length > overlay.major_tick_length {
            return Err(ConfigError::InvalidSetting {
                key: "overlay.minor_tick_length".to_string(),
                reason: "must not exceed major_tick_length".to_string(),
            });
        }

        let style = &self.style;
        if style.color.trim().is_empty() {
            return Err(ConfigError::InvalidSetting {
                key: "style.color".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if !is_positive(style.line_width) {
            return Err(ConfigError::out_of_range("style.line_width", style.line_width));
        }
        if let Some(dash) = &style.line_dash {
            if dash.iter().any(|d| !d.is_finite() || *d < 0.0) {
                return Err(ConfigError::InvalidSetting {
                    key: "style.line_dash".to_string(),
                    reason: "segments must be finite and non-negative".to_string(),
                });
            }
        }
        if !style.shadow.blur.is_finite() || style.shadow.blur < 0.0 {
            return Err(ConfigError::out_of_range("style.shadow.blur", style.shadow.blur));
        }
        if style.shadow.enabled && style.shadow.color.trim().is_empty() {
            return Err(ConfigError::InvalidSetting {
                key: "style.shadow.color".to_string(),
                reason: "must not be empty when the shadow is enabled".to_string(),
            });
        }

        Ok(())
    }

    /// Merge another config into this one, taking each section of `other`
    /// that differs from the defaults.
    pub fn merge(&mut self, other: &Config) {
        if other.overlay != OverlaySettings::default() {
            self.overlay = other.overlay.clone();
        }
        if other.style != StyleSettings::default() {
            self.style = other.style.clone();
        }
    }

    /// Geometry configuration for the overlay tool.
    pub fn overlay_config(&self) -> OverlayConfig {
        OverlayConfig {
            ticks: TickConfig {
                minor_tick_length: self.overlay.minor_tick_length,
                major_tick_length: self.overlay.major_tick_length,
            },
            horizontal_length_axis: self.overlay.length_axis,
        }
    }

    /// Per-frame drawing style.
    pub fn overlay_style(&self) -> OverlayStyle {
        let style = OverlayStyle::default()
            .with_color(self.style.color.clone())
            .with_line_width(self.style.line_width)
            .with_shadow(self.style.shadow.clone());
        match &self.style.line_dash {
            Some(dash) if !dash.is_empty() => style.with_line_dash(dash.clone()),
            _ => style,
        }
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
