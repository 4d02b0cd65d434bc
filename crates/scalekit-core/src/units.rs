//! Length unit utilities
//!
//! Handles the conversion from physical lengths (mm) to canvas distances
//! and the formatting of physical lengths for on-image labels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit used when labelling a physical length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    /// Millimeters
    Millimeter,
    /// Centimeters
    Centimeter,
}

impl LengthUnit {
    /// Number of millimeters in one unit
    pub fn millimeters(self) -> f64 {
        match self {
            Self::Millimeter => 1.0,
            Self::Centimeter => 10.0,
        }
    }

    /// Get the unit label ("mm" or "cm")
    pub fn label(self) -> &'static str {
        match self {
            Self::Millimeter => "mm",
            Self::Centimeter => "cm",
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Convert a physical length into a canvas distance
///
/// * `length_mm` - Physical length in millimeters
/// * `spacing_mm` - Physical size of one image pixel along the axis
/// * `scale` - Viewport zoom factor
///
/// ```text
/// canvas = (length_mm / spacing_mm) * scale
/// ```
#[inline]
pub fn physical_to_canvas(length_mm: f64, spacing_mm: f64, scale: f64) -> f64 {
    (length_mm / spacing_mm) * scale
}

/// Format a physical length for an on-image label
///
/// Whole centimeters are shown in cm ("5 cm"), anything else in mm.
pub fn format_reference_label(length_mm: f64) -> String {
    let unit = if length_mm != 0.0 && length_mm % LengthUnit::Centimeter.millimeters() == 0.0 {
        LengthUnit::Centimeter
    } else {
        LengthUnit::Millimeter
    };
    format!("{} {}", length_mm / unit.millimeters(), unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_label() {
        assert_eq!(format_reference_label(50.0), "5 cm");
        assert_eq!(format_reference_label(100.0), "10 cm");
        assert_eq!(format_reference_label(12.5), "12.5 mm");
        assert_eq!(format_reference_label(0.0), "0 mm");
    }

    #[test]
    fn test_physical_to_canvas() {
        assert_eq!(physical_to_canvas(50.0, 0.5, 1.0), 100.0);
        assert_eq!(physical_to_canvas(1.0, 0.25, 2.0), 8.0);
        assert_eq!(physical_to_canvas(50.0, 0.5, 0.5), 50.0);
    }

    #[test]
    fn test_unit_labels() {
        assert_eq!(LengthUnit::Millimeter.to_string(), "mm");
        assert_eq!(LengthUnit::Centimeter.to_string(), "cm");
    }
}
