//! Scale overlay tool.
//!
//! Ties the calibration resolver, the geometry builder and the visibility
//! state machine into the per-frame render callback a host invokes.

use std::sync::Arc;

use scalekit_core::{
    AppEvent, ElementId, EventBus, FrameEvent, LifecycleEvent, SkipReason,
};

use crate::calibration;
use crate::draw::{draw_overlay, DrawingSurface};
use crate::geometry::{self, OverlayConfig, OverlayGeometry};
use crate::host::{DisplayHost, MetadataProvider, RenderEvent};
use crate::lifecycle::{force_image_update, VisibilityState};
use crate::style::OverlayStyle;

pub const TOOL_NAME: &str = "ScaleOverlay";

/// Result of one render callback.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderOutcome {
    /// The overlay was drawn with this geometry.
    Drawn(OverlayGeometry),
    /// Nothing was drawn this frame.
    Skipped(SkipReason),
}

impl RenderOutcome {
    pub fn is_drawn(&self) -> bool {
        matches!(self, RenderOutcome::Drawn(_))
    }

    pub fn geometry(&self) -> Option<&OverlayGeometry> {
        match self {
            RenderOutcome::Drawn(geometry) => Some(geometry),
            RenderOutcome::Skipped(_) => None,
        }
    }
}

/// Binary tool that draws a calibrated 5 cm scale on the viewport.
#[derive(Debug, Clone)]
pub struct ScaleOverlayTool {
    name: String,
    config: OverlayConfig,
    visibility: VisibilityState,
    events: Option<Arc<EventBus>>,
}

impl Default for ScaleOverlayTool {
    fn default() -> Self {
        Self::new()
    }
}

impl ScaleOverlayTool {
    pub fn new() -> Self {
        Self::with_config(OverlayConfig::default())
    }

    pub fn with_config(config: OverlayConfig) -> Self {
        Self {
            name: TOOL_NAME.to_string(),
            config,
            visibility: VisibilityState::Disabled,
            events: None,
        }
    }

    /// Publish lifecycle and frame events on `bus`.
    pub fn with_event_bus(mut self, bus: Arc<EventBus>) -> Self {
        self.events = Some(bus);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    pub fn visibility(&self) -> VisibilityState {
        self.visibility
    }

    pub fn is_enabled(&self) -> bool {
        self.visibility.is_enabled()
    }

    /// Enable the overlay on `element`, redrawing it if it holds an image.
    pub fn enable<H: DisplayHost + ?Sized>(&mut self, host: &mut H, element: &ElementId) {
        if self.visibility.enable() {
            self.on_visibility_changed(host, element);
        }
    }

    /// Disable the overlay on `element`, redrawing it if it holds an image.
    pub fn disable<H: DisplayHost + ?Sized>(&mut self, host: &mut H, element: &ElementId) {
        if self.visibility.disable() {
            self.on_visibility_changed(host, element);
        }
    }

    fn on_visibility_changed<H: DisplayHost + ?Sized>(&self, host: &mut H, element: &ElementId) {
        let enabled = self.visibility.is_enabled();
        tracing::debug!(tool = %self.name, %element, enabled, "visibility changed");
        self.publish(AppEvent::Lifecycle(LifecycleEvent::VisibilityChanged {
            tool: self.name.clone(),
            element: element.clone(),
            enabled,
        }));

        if force_image_update(host, element) {
            self.publish(AppEvent::Lifecycle(LifecycleEvent::RedrawRequested {
                element: element.clone(),
            }));
        }
    }

    /// Per-frame render callback.
    ///
    /// Resolves calibration, builds the geometry, and hands it to `surface`.
    /// Skips the frame when disabled, uncalibrated, zoomed to an unusable
    /// scale, or when the surface is empty.
    pub fn render<M, S>(
        &self,
        event: &RenderEvent,
        metadata: &M,
        style: &OverlayStyle,
        surface: &mut S,
    ) -> RenderOutcome
    where
        M: MetadataProvider + ?Sized,
        S: DrawingSurface + ?Sized,
    {
        let outcome = self.compute(event, metadata);
        match &outcome {
            RenderOutcome::Drawn(geometry) => {
                draw_overlay(surface, geometry, style);
                self.publish(AppEvent::Frame(FrameEvent::Drawn {
                    element: event.element.clone(),
                    horizontal_length: geometry.horizontal_line.length(),
                    vertical_length: geometry.vertical_line.length(),
                }));
            }
            RenderOutcome::Skipped(reason) => {
                self.publish(AppEvent::Frame(FrameEvent::Skipped {
                    element: event.element.clone(),
                    reason: *reason,
                }));
            }
        }
        outcome
    }

    fn compute<M>(&self, event: &RenderEvent, metadata: &M) -> RenderOutcome
    where
        M: MetadataProvider + ?Sized,
    {
        if !self.visibility.is_enabled() {
            return RenderOutcome::Skipped(SkipReason::Disabled);
        }

        if !event.viewport.is_valid() {
            tracing::warn!(
                element = %event.element,
                scale = event.viewport.scale,
                "invalid viewport scale; overlay not rendered"
            );
            return RenderOutcome::Skipped(SkipReason::InvalidViewport);
        }

        let plane = metadata.image_plane(&event.image.image_id);
        let spacing = match calibration::resolve(&event.image, plane.as_ref()) {
            Ok(spacing) => spacing,
            Err(err) => {
                tracing::warn!(
                    tool = %self.name,
                    image = %event.image.image_id,
                    "{}; overlay not rendered",
                    err
                );
                return RenderOutcome::Skipped(SkipReason::Uncalibrated);
            }
        };

        match geometry::build(spacing, event.viewport, event.canvas, &self.config) {
            Some(geometry) => RenderOutcome::Drawn(geometry),
            None => {
                tracing::trace!(element = %event.element, "empty canvas, overlay not rendered");
                RenderOutcome::Skipped(SkipReason::DegenerateSurface)
            }
        }
    }

    fn publish(&self, event: AppEvent) {
        if let Some(bus) = &self.events {
            // Nobody listening is fine.
            bus.publish(event).ok();
        }
    }
}
