//! Overlay geometry in canvas space.
//!
//! Converts a resolved pixel spacing, the viewport zoom, and the canvas size
//! into the two ruler segments, their 1 mm tick intervals and the label
//! anchors. Canvas space has its origin at the top-left, +Y pointing down.

use scalekit_core::{format_reference_label, physical_to_canvas};
use serde::{Deserialize, Serialize};

use crate::calibration::PixelSpacing;

/// Physical length of both rulers in millimeters.
pub const REFERENCE_LENGTH_MM: f64 = 50.0;

/// Physical distance represented by one minor tick interval.
pub const MINOR_TICK_MM: f64 = 1.0;

/// Horizontal inset of the shared ruler corner from the left edge.
pub const ANCHOR_INSET_X: f64 = 15.0;

/// Vertical inset of the shared ruler corner from the bottom edge.
pub const ANCHOR_INSET_Y: f64 = 10.0;

pub const DEFAULT_MINOR_TICK_LENGTH: f64 = 10.0;
pub const DEFAULT_MAJOR_TICK_LENGTH: f64 = 20.0;

/// A point in canvas space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A straight segment between two canvas points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub start: Point,
    pub end: Point,
}

impl LineSegment {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Euclidean length of the segment.
    pub fn length(&self) -> f64 {
        (self.end.x - self.start.x).hypot(self.end.y - self.start.y)
    }
}

/// Extent of one ruler, expressed as the two corners of its bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleBounds {
    pub top_left: Point,
    pub bottom_right: Point,
}

/// Drawing-surface dimensions in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True when either dimension is zero (transient during layout).
    pub fn is_degenerate(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Current viewport state relevant to the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportState {
    /// Zoom factor applied uniformly to canvas distances.
    pub scale: f64,
}

impl ViewportState {
    pub fn new(scale: f64) -> Self {
        Self { scale }
    }

    /// True when the scale is finite and strictly positive.
    pub fn is_valid(&self) -> bool {
        self.scale.is_finite() && self.scale > 0.0
    }
}

impl Default for ViewportState {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

/// Tick mark lengths in canvas units, passed through to tick rendering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickConfig {
    pub minor_tick_length: f64,
    pub major_tick_length: f64,
}

impl Default for TickConfig {
    fn default() -> Self {
        Self {
            minor_tick_length: DEFAULT_MINOR_TICK_LENGTH,
            major_tick_length: DEFAULT_MAJOR_TICK_LENGTH,
        }
    }
}

/// Which pixel spacing sets the canvas length of the horizontal ruler.
///
/// The vertical ruler always uses row spacing. `RowSpacing` reproduces the
/// established behaviour where the horizontal ruler uses row spacing too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthAxis {
    RowSpacing,
    ColumnSpacing,
}

impl Default for LengthAxis {
    fn default() -> Self {
        Self::RowSpacing
    }
}

/// Tool configuration consumed by the geometry builder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OverlayConfig {
    pub ticks: TickConfig,
    pub horizontal_length_axis: LengthAxis,
}

/// Everything needed to draw one frame of the overlay.
///
/// Recomputed from scratch for every frame; never cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayGeometry {
    pub horizontal_line: LineSegment,
    pub vertical_line: LineSegment,
    pub horizontal_bounds: ScaleBounds,
    pub vertical_bounds: ScaleBounds,
    /// Canvas distance of 1 mm along the horizontal axis.
    pub minor_tick_interval_h: f64,
    /// Canvas distance of 1 mm along the vertical axis.
    pub minor_tick_interval_v: f64,
    pub horizontal_label: Point,
    pub vertical_label: Point,
    pub label: String,
    pub ticks: TickConfig,
}

impl OverlayGeometry {
    /// The corner shared by both rulers.
    pub fn anchor(&self) -> Point {
        self.horizontal_line.start
    }
}

/// Build the overlay geometry for one frame.
///
/// Returns `None` for a zero-width or zero-height canvas, or when the
/// viewport scale is not a finite positive number.
pub fn build(
    spacing: PixelSpacing,
    viewport: ViewportState,
    canvas: CanvasSize,
    config: &OverlayConfig,
) -> Option<OverlayGeometry> {
    if canvas.is_degenerate() || !viewport.is_valid() {
        return None;
    }

    let scale = viewport.scale;
    let horizontal_spacing = match config.horizontal_length_axis {
        LengthAxis::RowSpacing => spacing.row(),
        LengthAxis::ColumnSpacing => spacing.column(),
    };

    let vertical_length = physical_to_canvas(REFERENCE_LENGTH_MM, spacing.row(), scale);
    let horizontal_length = physical_to_canvas(REFERENCE_LENGTH_MM, horizontal_spacing, scale);

    let anchor = Point::new(ANCHOR_INSET_X, f64::from(canvas.height) - ANCHOR_INSET_Y);

    let horizontal_bounds = ScaleBounds {
        top_left: anchor,
        bottom_right: Point::new(anchor.x + horizontal_length, anchor.y),
    };
    let vertical_bounds = ScaleBounds {
        top_left: anchor,
        bottom_right: Point::new(anchor.x, anchor.y - vertical_length),
    };

    let horizontal_line = LineSegment::new(anchor, horizontal_bounds.bottom_right);
    let vertical_line = LineSegment::new(anchor, vertical_bounds.bottom_right);

    Some(OverlayGeometry {
        horizontal_label: Point::new(horizontal_line.end.x + 2.0, horizontal_line.start.y - 10.0),
        vertical_label: Point::new(0.0, vertical_line.end.y - 20.0),
        horizontal_line,
        vertical_line,
        horizontal_bounds,
        vertical_bounds,
        minor_tick_interval_h: physical_to_canvas(MINOR_TICK_MM, spacing.column(), scale),
        minor_tick_interval_v: physical_to_canvas(MINOR_TICK_MM, spacing.row(), scale),
        label: format_reference_label(REFERENCE_LENGTH_MM),
        ticks: config.ticks,
    })
}
