//! Event type definitions for the event bus.
//!
//! Events are organized by category and are cloneable and serializable
//! so they can be logged or replayed.

use serde::{Deserialize, Serialize};

use crate::types::ElementId;

/// Root event enum for all diagnostic events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AppEvent {
    /// Tool visibility transitions and redraw requests
    Lifecycle(LifecycleEvent),
    /// Per-frame render outcomes
    Frame(FrameEvent),
}

impl AppEvent {
    /// Get the category of this event
    pub fn category(&self) -> EventCategory {
        match self {
            AppEvent::Lifecycle(_) => EventCategory::Lifecycle,
            AppEvent::Frame(_) => EventCategory::Frame,
        }
    }

    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            AppEvent::Lifecycle(e) => e.description(),
            AppEvent::Frame(e) => e.description(),
        }
    }
}

/// Event category for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    /// Visibility and redraw events.
    Lifecycle,
    /// Render outcome events.
    Frame,
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventCategory::Lifecycle => write!(f, "Lifecycle"),
            EventCategory::Frame => write!(f, "Frame"),
        }
    }
}

/// Visibility lifecycle events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LifecycleEvent {
    /// A tool was enabled or disabled on an element.
    VisibilityChanged {
        /// Name of the tool.
        tool: String,
        /// Element the tool is attached to.
        element: ElementId,
        /// Whether the tool is now enabled.
        enabled: bool,
    },
    /// A redraw of the element's current image was requested from the host.
    RedrawRequested {
        /// Element being redrawn.
        element: ElementId,
    },
}

impl LifecycleEvent {
    /// Get a short description of this event
    pub fn description(&self) -> String {
        match self {
            LifecycleEvent::VisibilityChanged {
                tool,
                element,
                enabled,
            } => {
                let state = if *enabled { "enabled" } else { "disabled" };
                format!("{} {} on {}", tool, state, element)
            }
            LifecycleEvent::RedrawRequested { element } => {
                format!("Redraw requested for {}", element)
            }
        }
    }
}

/// Why a frame was rendered without an overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkipReason {
    /// The tool is disabled.
    Disabled,
    /// Row or column pixel spacing could not be resolved.
    Uncalibrated,
    /// The drawing surface has zero width or height.
    DegenerateSurface,
    /// The viewport scale is zero, negative or not finite.
    InvalidViewport,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::Disabled => write!(f, "tool disabled"),
            SkipReason::Uncalibrated => write!(f, "image not calibrated"),
            SkipReason::DegenerateSurface => write!(f, "degenerate drawing surface"),
            SkipReason::InvalidViewport => write!(f, "invalid viewport scale"),
        }
    }
}

/// Per-frame render events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FrameEvent {
    /// The overlay was drawn.
    Drawn {
        /// Element that was drawn on.
        element: ElementId,
        /// Canvas length of the horizontal ruler.
        horizontal_length: f64,
        /// Canvas length of the vertical ruler.
        vertical_length: f64,
    },
    /// The overlay was skipped for this frame.
    Skipped {
        /// Element whose frame was skipped.
        element: ElementId,
        /// Why nothing was drawn.
        reason: SkipReason,
    },
}

impl FrameEvent {
    /// Get a short description of this event
    pub fn description(&self) -> String {
        match self {
            FrameEvent::Drawn {
                element,
                horizontal_length,
                vertical_length,
            } => format!(
                "Overlay drawn on {} ({:.1} x {:.1})",
                element, horizontal_length, vertical_length
            ),
            FrameEvent::Skipped { element, reason } => {
                format!("Overlay skipped on {}: {}", element, reason)
            }
        }
    }
}
