//! Host viewer interfaces.
//!
//! The overlay is driven by a host image-viewing runtime. These traits are
//! the only capabilities it needs from that runtime.

use std::collections::HashMap;

use scalekit_core::ElementId;
use serde::{Deserialize, Serialize};

use crate::calibration::{ImageInfo, ImagePlaneMetadata};
use crate::geometry::{CanvasSize, ViewportState};

/// Per-frame render event delivered by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderEvent {
    pub element: ElementId,
    pub image: ImageInfo,
    pub viewport: ViewportState,
    pub canvas: CanvasSize,
}

/// Lookup of imaging-plane metadata by image identifier.
pub trait MetadataProvider {
    fn image_plane(&self, image_id: &str) -> Option<ImagePlaneMetadata>;
}

/// Display capabilities of the host.
pub trait DisplayHost {
    /// Whether the element currently holds an image.
    fn has_image(&self, element: &ElementId) -> bool;

    /// Redraw the element's current image, re-running render callbacks.
    fn update_image(&mut self, element: &ElementId);
}

/// Provider for hosts without imaging-plane metadata.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoMetadata;

impl MetadataProvider for NoMetadata {
    fn image_plane(&self, _image_id: &str) -> Option<ImagePlaneMetadata> {
        None
    }
}

impl MetadataProvider for HashMap<String, ImagePlaneMetadata> {
    fn image_plane(&self, image_id: &str) -> Option<ImagePlaneMetadata> {
        self.get(image_id).cloned()
    }
}
