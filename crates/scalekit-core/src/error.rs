//! Calibration error shared by the overlay and its hosts.

use thiserror::Error;

/// Calibration error type
///
/// Produced when an image carries no usable physical pixel spacing.
/// Uncalibrated images are routine, so callers treat this as
/// "skip the overlay for this frame" rather than as a failure.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalibrationError {
    /// Row or column spacing is missing, zero, negative or not finite
    #[error("Unable to resolve pixel spacing (row: {row:?}, column: {column:?})")]
    Uncalibrated {
        /// The row spacing that was found, if any.
        row: Option<f64>,
        /// The column spacing that was found, if any.
        column: Option<f64>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uncalibrated_display() {
        let err = CalibrationError::Uncalibrated {
            row: Some(0.0),
            column: None,
        };
        assert_eq!(
            err.to_string(),
            "Unable to resolve pixel spacing (row: Some(0.0), column: None)"
        );
    }
}
