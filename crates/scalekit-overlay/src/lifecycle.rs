//! Enabled/disabled state machine for binary overlay tools.

use scalekit_core::ElementId;
use serde::{Deserialize, Serialize};

use crate::host::DisplayHost;

/// Visibility of an overlay tool.
///
/// `enable` and `disable` are the only mutators; each reports whether the
/// state actually changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisibilityState {
    #[default]
    Disabled,
    Enabled,
}

impl VisibilityState {
    pub fn is_enabled(self) -> bool {
        self == Self::Enabled
    }

    /// Move to `Enabled`. Returns false if already enabled.
    pub fn enable(&mut self) -> bool {
        self.transition_to(Self::Enabled)
    }

    /// Move to `Disabled`. Returns false if already disabled.
    pub fn disable(&mut self) -> bool {
        self.transition_to(Self::Disabled)
    }

    fn transition_to(&mut self, target: Self) -> bool {
        if *self == target {
            return false;
        }
        *self = target;
        true
    }
}

impl std::fmt::Display for VisibilityState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Disabled => write!(f, "disabled"),
            Self::Enabled => write!(f, "enabled"),
        }
    }
}

/// Ask the host to redraw `element` if it holds an image.
///
/// Returns true when a redraw was requested.
pub fn force_image_update<H: DisplayHost + ?Sized>(host: &mut H, element: &ElementId) -> bool {
    if !host.has_image(element) {
        tracing::debug!(%element, "no image loaded, redraw skipped");
        return false;
    }
    host.update_image(element);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CountingHost {
        loaded: bool,
        updates: usize,
    }

    impl DisplayHost for CountingHost {
        fn has_image(&self, _element: &ElementId) -> bool {
            self.loaded
        }

        fn update_image(&mut self, _element: &ElementId) {
            self.updates += 1;
        }
    }

    #[test]
    fn test_initial_state() {
        assert_eq!(VisibilityState::default(), VisibilityState::Disabled);
        assert!(!VisibilityState::default().is_enabled());
    }

    #[test]
    fn test_transitions() {
        let mut state = VisibilityState::default();
        assert!(state.enable());
        assert!(state.is_enabled());
        assert!(!state.enable());
        assert!(state.disable());
        assert!(!state.disable());
        assert_eq!(state, VisibilityState::Disabled);
    }

    #[test]
    fn test_force_image_update() {
        let element = ElementId::new("vp");

        let mut host = CountingHost {
            loaded: true,
            updates: 0,
        };
        assert!(force_image_update(&mut host, &element));
        assert_eq!(host.updates, 1);

        let mut host = CountingHost {
            loaded: false,
            updates: 0,
        };
        assert!(!force_image_update(&mut host, &element));
        assert_eq!(host.updates, 0);
    }
}
