//! Pixel spacing resolution.
//!
//! Determines the physical size of one image pixel (mm) along each axis from
//! the image's own fields, optionally overridden by imaging-plane metadata.

use scalekit_core::CalibrationError;
use serde::{Deserialize, Serialize};

/// Image as seen by the overlay: an identifier plus its native spacing fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageInfo {
    /// Identifier used to look up imaging-plane metadata.
    pub image_id: String,
    /// Native row pixel spacing (mm), if the image carries one.
    #[serde(default)]
    pub row_pixel_spacing: Option<f64>,
    /// Native column pixel spacing (mm), if the image carries one.
    #[serde(default)]
    pub column_pixel_spacing: Option<f64>,
}

impl ImageInfo {
    pub fn new(image_id: impl Into<String>) -> Self {
        Self {
            image_id: image_id.into(),
            ..Default::default()
        }
    }

    pub fn with_spacing(mut self, row: f64, column: f64) -> Self {
        self.row_pixel_spacing = Some(row);
        self.column_pixel_spacing = Some(column);
        self
    }
}

/// Optional imaging-plane descriptor that can override the native spacing.
///
/// Two historical field names carry the same value; the `*_image_pixel_spacing`
/// variants are only consulted when the primary field is empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImagePlaneMetadata {
    #[serde(default)]
    pub row_pixel_spacing: Option<f64>,
    #[serde(default)]
    pub column_pixel_spacing: Option<f64>,
    #[serde(default)]
    pub row_image_pixel_spacing: Option<f64>,
    #[serde(default)]
    pub column_image_pixel_spacing: Option<f64>,
}

impl ImagePlaneMetadata {
    /// Row spacing: primary field first, then the alternate name.
    pub fn row_spacing(&self) -> Option<f64> {
        non_empty(self.row_pixel_spacing).or_else(|| non_empty(self.row_image_pixel_spacing))
    }

    /// Column spacing: primary field first, then the alternate name.
    pub fn column_spacing(&self) -> Option<f64> {
        non_empty(self.column_pixel_spacing)
            .or_else(|| non_empty(self.column_image_pixel_spacing))
    }
}

/// Effective physical pixel spacing in millimeters.
///
/// Both components are finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelSpacing {
    row: f64,
    column: f64,
}

impl PixelSpacing {
    /// Returns `None` unless both components are finite and > 0.
    pub fn new(row: f64, column: f64) -> Option<Self> {
        if is_valid_spacing(row) && is_valid_spacing(column) {
            Some(Self { row, column })
        } else {
            None
        }
    }

    /// Millimeters per pixel along the image rows (vertical axis).
    pub fn row(&self) -> f64 {
        self.row
    }

    /// Millimeters per pixel along the image columns (horizontal axis).
    pub fn column(&self) -> f64 {
        self.column
    }
}

/// Resolve the effective pixel spacing for a frame.
///
/// The imaging-plane pair replaces the image's native pair when both of its
/// axes resolve to a non-empty value. A missing, zero, negative or non-finite
/// result on either axis yields [`CalibrationError::Uncalibrated`].
pub fn resolve(
    image: &ImageInfo,
    plane: Option<&ImagePlaneMetadata>,
) -> Result<PixelSpacing, CalibrationError> {
    let mut row = image.row_pixel_spacing;
    let mut column = image.column_pixel_spacing;

    if let Some(plane) = plane {
        if let (Some(plane_row), Some(plane_column)) = (plane.row_spacing(), plane.column_spacing())
        {
            row = Some(plane_row);
            column = Some(plane_column);
        }
    }

    match (row, column) {
        (Some(r), Some(c)) => {
            PixelSpacing::new(r, c).ok_or(CalibrationError::Uncalibrated { row, column })
        }
        _ => Err(CalibrationError::Uncalibrated { row, column }),
    }
}

fn non_empty(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}

fn is_valid_spacing(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
