//! Error types for mosaic generation, styling and export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all mosaic operations
#[derive(Debug)]
pub enum MosaicError {
    /// Input parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Partition recursion exceeded one of its safety guards
    ///
    /// Raised instead of returning a truncated layout, so a layout is
    /// either complete or absent.
    LimitExceeded {
        /// Name of the guard that tripped
        limit: &'static str,
        /// Configured value of the guard
        value: usize,
    },

    /// A palette entry could not be parsed as a color
    InvalidColor {
        /// Raw text of the entry
        input: String,
        /// Why parsing failed
        reason: &'static str,
    },

    /// A layout does not tile its canvas exactly
    CoverageViolation {
        /// Column of the offending unit cell
        x: usize,
        /// Row of the offending unit cell
        y: usize,
        /// Number of shapes covering the cell (0 = gap, 2+ = overlap)
        count: u32,
    },

    /// Failed to save a rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for MosaicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::LimitExceeded { limit, value } => {
                write!(f, "Partition exceeded {limit} of {value}")
            }
            Self::InvalidColor { input, reason } => {
                write!(f, "Invalid color '{input}': {reason}")
            }
            Self::CoverageViolation { x, y, count } => {
                let kind = if *count == 0 { "gap" } else { "overlap" };
                write!(
                    f,
                    "Layout {kind} at cell ({x}, {y}): covered by {count} shapes"
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for MosaicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for mosaic results
pub type Result<T> = std::result::Result<T, MosaicError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MosaicError {
    MosaicError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Reject non-finite or non-positive values
///
/// # Errors
///
/// Returns `InvalidParameter` naming `parameter` when `value` is NaN,
/// infinite, or not strictly positive
pub fn require_positive(parameter: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(invalid_parameter(
            parameter,
            &value,
            &"must be a finite number greater than zero",
        ))
    }
}
