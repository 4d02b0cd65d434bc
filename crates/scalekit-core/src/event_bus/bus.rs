//! Synchronous diagnostic event bus.
//!
//! Handlers run on the publishing thread, inside the render callback.

use parking_lot::RwLock;
use std::sync::Arc;

use super::events::{AppEvent, EventCategory};

/// Which events a handler receives.
#[derive(Debug, Clone, Default)]
pub enum EventFilter {
    #[default]
    All,
    /// Events in any of these categories.
    Categories(Vec<EventCategory>),
}

impl EventFilter {
    pub fn matches(&self, event: &AppEvent) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::Categories(categories) => categories.contains(&event.category()),
        }
    }
}

type Handler = Arc<dyn Fn(AppEvent) + Send + Sync>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EventBusError {
    #[error("No active subscribers")]
    NoSubscribers,
}

/// Fan-out of overlay events to loggers, tests and the host.
#[derive(Default)]
pub struct EventBus {
    handlers: RwLock<Vec<(EventFilter, Handler)>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver `event` to every handler whose filter matches.
    ///
    /// Returns the number of handlers called. Handlers are invoked after the
    /// lock is released, so they may subscribe further handlers.
    pub fn publish(&self, event: AppEvent) -> Result<usize, EventBusError> {
        let matching: Vec<Handler> = {
            let handlers = self.handlers.read();
            if handlers.is_empty() {
                return Err(EventBusError::NoSubscribers);
            }
            handlers
                .iter()
                .filter(|(filter, _)| filter.matches(&event))
                .map(|(_, handler)| Arc::clone(handler))
                .collect()
        };

        for handler in &matching {
            handler(event.clone());
        }
        Ok(matching.len())
    }

    pub fn subscribe<F>(&self, filter: EventFilter, handler: F)
    where
        F: Fn(AppEvent) + Send + Sync + 'static,
    {
        self.handlers.write().push((filter, Arc::new(handler)));
        tracing::trace!(subscribers = self.subscriber_count(), "handler subscribed");
    }

    pub fn subscriber_count(&self) -> usize {
        self.handlers.read().len()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event_bus::events::{FrameEvent, LifecycleEvent, SkipReason};
    use crate::types::ElementId;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn redraw(id: &str) -> AppEvent {
        AppEvent::Lifecycle(LifecycleEvent::RedrawRequested {
            element: ElementId::new(id),
        })
    }

    fn skipped(reason: SkipReason) -> AppEvent {
        AppEvent::Frame(FrameEvent::Skipped {
            element: ElementId::new("vp"),
            reason,
        })
    }

    #[test]
    fn test_publish_without_subscribers() {
        let bus = EventBus::new();
        assert_eq!(bus.subscriber_count(), 0);
        assert_eq!(bus.publish(redraw("vp")), Err(EventBusError::NoSubscribers));
    }

    #[test]
    fn test_event_delivery() {
        let bus = EventBus::new();
        let counter = Arc::new(AtomicUsize::new(0));
        let seen = counter.clone();
        bus.subscribe(EventFilter::All, move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });

        assert_eq!(bus.publish(redraw("vp")), Ok(1));
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_category_filter() {
        let bus = EventBus::new();
        let lifecycle = Arc::new(AtomicUsize::new(0));
        let frames = Arc::new(AtomicUsize::new(0));

        let lc = lifecycle.clone();
        bus.subscribe(
            EventFilter::Categories(vec![EventCategory::Lifecycle]),
            move |_| {
                lc.fetch_add(1, Ordering::SeqCst);
            },
        );
        let fc = frames.clone();
        bus.subscribe(
            EventFilter::Categories(vec![EventCategory::Frame]),
            move |_| {
                fc.fetch_add(1, Ordering::SeqCst);
            },
        );

        assert_eq!(bus.publish(redraw("vp")), Ok(1));
        bus.publish(skipped(SkipReason::Uncalibrated)).ok();
        bus.publish(skipped(SkipReason::Disabled)).ok();

        assert_eq!(lifecycle.load(Ordering::SeqCst), 1);
        assert_eq!(frames.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_handler_may_subscribe_while_publishing() {
        let bus = Arc::new(EventBus::new());
        let inner = Arc::clone(&bus);
        bus.subscribe(EventFilter::All, move |_| {
            inner.subscribe(EventFilter::All, |_| {});
        });

        assert_eq!(bus.publish(redraw("vp")), Ok(1));
        assert_eq!(bus.subscriber_count(), 2);
    }

    #[test]
    fn test_filter_matches() {
        let event = redraw("vp");

        assert!(EventFilter::All.matches(&event));
        assert!(EventFilter::Categories(vec![EventCategory::Lifecycle]).matches(&event));
        assert!(!EventFilter::Categories(vec![EventCategory::Frame]).matches(&event));
    }
}
