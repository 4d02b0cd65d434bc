//! # ScaleKit
//!
//! Calibrated scale overlay for medical image viewports. Draws a 5 cm
//! horizontal and vertical ruler in the bottom-left corner of the canvas,
//! sized from the image's physical pixel spacing and the current zoom.
//!
//! ## Architecture
//!
//! ScaleKit is organized as a workspace with multiple crates:
//!
//! 1. **scalekit-core** - Errors, length units, diagnostic event bus
//! 2. **scalekit-overlay** - Calibration, geometry, drawing surfaces, the tool
//! 3. **scalekit-settings** - Configuration files and persistence
//! 4. **scalekit** - This crate: re-exports, logging setup, CLI binary

use std::sync::Arc;

pub use scalekit_core::{
    AppEvent, CalibrationError, ElementId, EventBus, EventCategory, EventFilter, FrameEvent,
    LifecycleEvent, SkipReason,
};

pub use scalekit_overlay::{
    build, resolve, CanvasSize, DisplayHost, DrawCommand, DrawingSurface, ImageInfo,
    ImagePlaneMetadata, LengthAxis, MetadataProvider, NoMetadata, OverlayConfig,
    OverlayGeometry, OverlayStyle, PixelSpacing, RecordingSurface, RenderEvent, RenderOutcome,
    ScaleOverlayTool, ShadowStyle, SvgSurface, ViewportState, VisibilityState,
};

pub use scalekit_settings::{Config, SettingsError, SettingsPersistence};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging
///
/// Honors `RUST_LOG`, defaulting to `info`. `json` switches the console
/// formatter to one JSON object per line.
pub fn init_logging(json: bool) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Logs go to stderr so rendered output on stdout stays clean.
    if json {
        let fmt_layer = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_current_span(false);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_line_number(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    }

    Ok(())
}

/// Create a tool from settings and attach it to `element`.
///
/// The tool starts enabled when the config asks for it, which triggers the
/// usual redraw request on `host`.
pub fn attach_tool<H: DisplayHost + ?Sized>(
    config: &Config,
    events: Option<Arc<EventBus>>,
    host: &mut H,
    element: &ElementId,
) -> ScaleOverlayTool {
    let mut tool = ScaleOverlayTool::with_config(config.overlay_config());
    if let Some(bus) = events {
        tool = tool.with_event_bus(bus);
    }
    if config.overlay.enabled_on_startup {
        tool.enable(host, element);
    }
    tool
}

/// Forward every bus event to the tracing log at debug level.
pub fn log_events(bus: &EventBus) {
    bus.subscribe(EventFilter::All, |event| {
        tracing::debug!(category = %event.category(), "{}", event.description());
    });
}
