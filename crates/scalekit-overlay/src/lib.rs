//! # ScaleKit Overlay
//!
//! Calibrated scale overlay for medical image viewports: two perpendicular
//! 5 cm rulers anchored at the bottom-left of the canvas, sized from the
//! image's physical pixel spacing and the current zoom.
//!
//! - [`calibration`]: pixel spacing resolution from image and plane metadata
//! - [`geometry`]: canvas-space ruler segments, tick intervals, label anchors
//! - [`lifecycle`]: enabled/disabled state machine and redraw requests
//! - [`tool`]: the per-frame render callback
//! - [`draw`] / [`svg`]: drawing collaborator trait and bundled surfaces

pub mod calibration;
pub mod draw;
pub mod geometry;
pub mod host;
pub mod lifecycle;
pub mod style;
pub mod svg;
pub mod tool;

pub use calibration::{resolve, ImageInfo, ImagePlaneMetadata, PixelSpacing};
pub use draw::{draw_overlay, DrawCommand, DrawingSurface, RecordingSurface};
pub use geometry::{
    build, CanvasSize, LengthAxis, LineSegment, OverlayConfig, OverlayGeometry, Point,
    ScaleBounds, TickConfig, ViewportState, REFERENCE_LENGTH_MM,
};
pub use host::{DisplayHost, MetadataProvider, NoMetadata, RenderEvent};
pub use lifecycle::VisibilityState;
pub use style::{OverlayStyle, ShadowStyle};
pub use svg::SvgSurface;
pub use tool::{RenderOutcome, ScaleOverlayTool, TOOL_NAME};
