//! Resolved drawing style for one frame.
//!
//! The host resolves colour, width and shadow once per frame and passes the
//! result into the render call; the overlay never reads shared style state.

use serde::{Deserialize, Serialize};

pub const DEFAULT_COLOR: &str = "white";
pub const DEFAULT_LINE_WIDTH: f64 = 1.0;

/// Drop shadow applied to everything drawn in the overlay pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadowStyle {
    pub enabled: bool,
    pub color: String,
    pub offset_x: f64,
    pub offset_y: f64,
    pub blur: f64,
}

impl Default for ShadowStyle {
    fn default() -> Self {
        Self {
            enabled: false,
            color: "#000000".to_string(),
            offset_x: 1.0,
            offset_y: 1.0,
            blur: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayStyle {
    pub color: String,
    pub line_width: f64,
    /// Dash pattern for the ruler lines; solid when `None`.
    pub line_dash: Option<Vec<f64>>,
    pub shadow: ShadowStyle,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR.to_string(),
            line_width: DEFAULT_LINE_WIDTH,
            line_dash: None,
            shadow: ShadowStyle::default(),
        }
    }
}

impl OverlayStyle {
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_line_width(mut self, line_width: f64) -> Self {
        self.line_width = line_width;
        self
    }

    pub fn with_line_dash(mut self, dash: Vec<f64>) -> Self {
        self.line_dash = Some(dash);
        self
    }

    pub fn with_shadow(mut self, shadow: ShadowStyle) -> Self {
        self.shadow = shadow;
        self
    }
}
