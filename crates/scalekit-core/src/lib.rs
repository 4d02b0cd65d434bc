//! # ScaleKit Core
//!
//! Core types, the calibration error, and utilities for ScaleKit.
//! Provides the length units used to label physical distances, the
//! element identifiers shared with the host viewer, and the diagnostic
//! event bus the overlay publishes to.

pub mod error;
pub mod event_bus;
pub mod types;
pub mod units;

pub use error::CalibrationError;

pub use event_bus::{
    AppEvent, EventBus, EventBusError, EventCategory, EventFilter, FrameEvent, LifecycleEvent,
    SkipReason,
};

pub use types::ElementId;

pub use units::{format_reference_label, physical_to_canvas, LengthUnit};
