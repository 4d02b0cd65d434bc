//! Drawing collaborator interface.
//!
//! The overlay only issues high-level requests (shadow, arrows, text boxes);
//! stroking and text layout belong to whatever implements [`DrawingSurface`].

use serde::{Deserialize, Serialize};

use crate::geometry::{OverlayGeometry, Point};
use crate::style::{OverlayStyle, ShadowStyle};

/// Low-level 2D drawing primitives provided by the host.
pub trait DrawingSurface {
    /// Apply a drop shadow to subsequent primitives.
    fn set_shadow(&mut self, shadow: &ShadowStyle);

    /// Stroke a straight arrow-headed segment from `start` to `end`.
    fn draw_arrow(
        &mut self,
        start: Point,
        end: Point,
        color: &str,
        line_width: f64,
        line_dash: Option<&[f64]>,
    );

    /// Render a text box anchored at (`x`, `y`).
    fn draw_text_box(&mut self, text: &str, x: f64, y: f64, color: &str);
}

/// One recorded drawing request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCommand {
    Shadow(ShadowStyle),
    Arrow {
        start: Point,
        end: Point,
        color: String,
        line_width: f64,
        line_dash: Option<Vec<f64>>,
    },
    TextBox {
        text: String,
        x: f64,
        y: f64,
        color: String,
    },
}

/// Surface that records every request instead of drawing it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Replay the recorded requests onto another surface.
    pub fn replay<S: DrawingSurface + ?Sized>(&self, target: &mut S) {
        for command in &self.commands {
            match command {
                DrawCommand::Shadow(shadow) => target.set_shadow(shadow),
                DrawCommand::Arrow {
                    start,
                    end,
                    color,
                    line_width,
                    line_dash,
                } => target.draw_arrow(*start, *end, color, *line_width, line_dash.as_deref()),
                DrawCommand::TextBox { text, x, y, color } => {
                    target.draw_text_box(text, *x, *y, color)
                }
            }
        }
    }
}

impl DrawingSurface for RecordingSurface {
    fn set_shadow(&mut self, shadow: &ShadowStyle) {
        self.commands.push(DrawCommand::Shadow(shadow.clone()));
    }

    fn draw_arrow(
        &mut self,
        start: Point,
        end: Point,
        color: &str,
        line_width: f64,
        line_dash: Option<&[f64]>,
    ) {
        self.commands.push(DrawCommand::Arrow {
            start,
            end,
            color: color.to_string(),
            line_width,
            line_dash: line_dash.map(<[f64]>::to_vec),
        });
    }

    fn draw_text_box(&mut self, text: &str, x: f64, y: f64, color: &str) {
        self.commands.push(DrawCommand::TextBox {
            text: text.to_string(),
            x,
            y,
            color: color.to_string(),
        });
    }
}

/// Issue the drawing requests for one frame.
///
/// Order: shadow, horizontal label, vertical label, horizontal arrow,
/// vertical arrow.
pub fn draw_overlay<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    geometry: &OverlayGeometry,
    style: &OverlayStyle,
) {
    surface.set_shadow(&style.shadow);

    surface.draw_text_box(
        &geometry.label,
        geometry.horizontal_label.x,
        geometry.horizontal_label.y,
        &style.color,
    );
    surface.draw_text_box(
        &geometry.label,
        geometry.vertical_label.x,
        geometry.vertical_label.y,
        &style.color,
    );

    let dash = style.line_dash.as_deref();
    surface.draw_arrow(
        geometry.horizontal_line.start,
        geometry.horizontal_line.end,
        &style.color,
        style.line_width,
        dash,
    );
    surface.draw_arrow(
        geometry.vertical_line.start,
        geometry.vertical_line.end,
        &style.color,
        style.line_width,
        dash,
    );
}
