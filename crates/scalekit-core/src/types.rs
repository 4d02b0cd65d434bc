//! Identifiers shared between the overlay and the host viewer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Handle of a display element owned by the host viewer.
///
/// The overlay never dereferences it; it only passes it back to the host
/// when asking whether an image is loaded or requesting a redraw.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementId(pub String);

impl ElementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}
