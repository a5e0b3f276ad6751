//! Coupled minimum and maximum shape sizes

use crate::io::error::{Result, require_positive};

/// Minimum and maximum shape side, kept ordered
///
/// Moving one bound past the other drags the other along, so
/// `min <= max` holds after every update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeBounds {
    min: f64,
    max: f64,
}

impl SizeBounds {
    /// Create bounds, raising `max` to `min` if it is smaller
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if either value is not a positive finite number
    pub fn new(min: f64, max: f64) -> Result<Self> {
        let min = require_positive("min_size", min)?;
        let max = require_positive("max_size", max)?;
        Ok(Self {
            min,
            max: max.max(min),
        })
    }

    /// Smallest side a split may produce
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Largest side a leaf may keep
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Move the minimum; the maximum follows if crossed
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `min` is not a positive finite number;
    /// the bounds are left unchanged
    pub fn set_min(&mut self, min: f64) -> Result<()> {
        self.min = require_positive("min_size", min)?;
        if self.max < self.min {
            self.max = self.min;
        }
        Ok(())
    }

    /// Move the maximum; the minimum follows if crossed
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `max` is not a positive finite number;
    /// the bounds are left unchanged
    pub fn set_max(&mut self, max: f64) -> Result<()> {
        self.max = require_positive("max_size", max)?;
        if self.min > self.max {
            self.min = self.max;
        }
        Ok(())
    }
}
