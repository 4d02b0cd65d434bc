//! # Event Bus Module
//!
//! Provides a small publish/subscribe bus for diagnostic events emitted by
//! the overlay (visibility changes, redraw requests, per-frame outcomes).
//!
//! ## Usage
//!
//! ```rust,ignore
//! use scalekit_core::event_bus::{AppEvent, EventBus, EventCategory, EventFilter};
//!
//! let bus = EventBus::new();
//! bus.subscribe(
//!     EventFilter::Categories(vec![EventCategory::Frame]),
//!     |event| println!("{}", event.description()),
//! );
//! ```

mod bus;
mod events;

pub use bus::*;
pub use events::*;
