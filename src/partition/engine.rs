//! Recursive rectangle subdivision
//!
//! A rectangle stops subdividing once it fits within the maximum size (with
//! a small chance to keep going for variety) or once neither axis can be cut
//! without producing a child below the minimum size. Otherwise it is cut
//! across its longer axis at a random offset and both halves recurse.

use rand::Rng;

use crate::io::configuration::{MAX_PARTITION_DEPTH, MAX_PARTITION_LEAVES, STOP_PROBABILITY};
use crate::io::error::{MosaicError, Result, invalid_parameter, require_positive};
use crate::math::probability::{bernoulli, unit_interval};
use crate::spatial::Rect;

/// Leaf rectangle produced by a partition run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseShape {
    /// Emission order within the run, starting at 0
    pub id: usize,
    /// Bounding rectangle in canvas coordinates
    pub rect: Rect,
}

/// Size bounds and heuristics for one partition run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartitionConfig {
    /// Smallest side a split may produce
    pub min_size: f64,
    /// Largest side a leaf may keep while a split is still possible
    pub max_size: f64,
    /// Chance that a rectangle within `max_size` stops subdividing
    pub stop_probability: f64,
    /// Snap split coordinates to integers
    pub round_splits: bool,
    /// Recursion depth at which the run fails
    pub max_depth: usize,
    /// Leaf count at which the run fails
    pub max_leaves: usize,
}

impl PartitionConfig {
    /// Create a configuration with the default heuristics
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if either size is not a positive finite
    /// number or if `max_size < min_size`
    pub fn new(min_size: f64, max_size: f64) -> Result<Self> {
        let config = Self {
            min_size,
            max_size,
            stop_probability: STOP_PROBABILITY,
            round_splits: true,
            max_depth: MAX_PARTITION_DEPTH,
            max_leaves: MAX_PARTITION_LEAVES,
        };
        config.validate()?;
        Ok(config)
    }

    /// Replace the early-stop probability
    #[must_use]
    pub const fn with_stop_probability(mut self, stop_probability: f64) -> Self {
        self.stop_probability = stop_probability;
        self
    }

    /// Enable or disable integer snapping of split coordinates
    #[must_use]
    pub const fn with_rounding(mut self, round_splits: bool) -> Self {
        self.round_splits = round_splits;
        self
    }

    /// Replace the recursion guards
    #[must_use]
    pub const fn with_limits(mut self, max_depth: usize, max_leaves: usize) -> Self {
        self.max_depth = max_depth;
        self.max_leaves = max_leaves;
        self
    }

    /// Check the configuration before a run
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` describing the first invalid field
    pub fn validate(&self) -> Result<()> {
        require_positive("min_size", self.min_size)?;
        require_positive("max_size", self.max_size)?;
        if self.max_size < self.min_size {
            return Err(invalid_parameter(
                "max_size",
                &self.max_size,
                &format!("must not be smaller than min_size ({})", self.min_size),
            ));
        }
        if !(0.0..=1.0).contains(&self.stop_probability) {
            return Err(invalid_parameter(
                "stop_probability",
                &self.stop_probability,
                &"must lie in [0, 1]",
            ));
        }
        Ok(())
    }
}

/// Summary of the decisions made during one partition run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PartitionTrace {
    /// Deepest recursion level that emitted a leaf (root = 0)
    pub max_depth_reached: usize,
    /// Leaves that stopped because they fit within the max size
    pub stopped_within_max: usize,
    /// Leaves that stopped because neither axis could be split
    pub stopped_unsplittable: usize,
    /// Unsplittable leaves that still exceed the max size
    pub oversized: usize,
}

impl PartitionTrace {
    /// Total number of leaves emitted
    pub const fn leaves(&self) -> usize {
        self.stopped_within_max + self.stopped_unsplittable
    }
}

/// Axis of a single cut
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SplitAxis {
    /// Cut along a vertical line, producing left and right halves
    Vertical,
    /// Cut along a horizontal line, producing top and bottom halves
    Horizontal,
}

/// Recursion state for one run: the leaf accumulator doubles as the id counter
struct Partitioner<'a, R: Rng + ?Sized> {
    config: &'a PartitionConfig,
    rng: &'a mut R,
    shapes: Vec<BaseShape>,
    trace: PartitionTrace,
}

impl<R: Rng + ?Sized> Partitioner<'_, R> {
    fn subdivide(&mut self, rect: Rect, depth: usize) -> Result<()> {
        if depth > self.config.max_depth {
            return Err(MosaicError::LimitExceeded {
                limit: "max_depth",
                value: self.config.max_depth,
            });
        }

        let min_size = self.config.min_size;
        let can_split_vertically = rect.width >= 2.0 * min_size;
        let can_split_horizontally = rect.height >= 2.0 * min_size;
        let within_max = rect.fits_within(self.config.max_size);

        if within_max && bernoulli(&mut *self.rng, self.config.stop_probability) {
            self.trace.stopped_within_max += 1;
            return self.emit(rect, depth);
        }
        if !can_split_vertically && !can_split_horizontally {
            self.trace.stopped_unsplittable += 1;
            if !within_max {
                self.trace.oversized += 1;
            }
            return self.emit(rect, depth);
        }

        let axis = if (rect.width > rect.height && can_split_vertically) || !can_split_horizontally
        {
            SplitAxis::Vertical
        } else {
            SplitAxis::Horizontal
        };

        let (first, second) = match axis {
            SplitAxis::Vertical => rect.split_vertical(self.split_offset(rect.x, rect.width)),
            SplitAxis::Horizontal => rect.split_horizontal(self.split_offset(rect.y, rect.height)),
        };

        self.subdivide(first, depth + 1)?;
        self.subdivide(second, depth + 1)
    }

    /// Random cut position along an axis leaving both children at least `min_size`
    ///
    /// With rounding on, the absolute cut coordinate is snapped to the nearest
    /// integer that still respects the minimum on both sides. If no such
    /// integer exists the unrounded offset is kept.
    fn split_offset(&mut self, origin: f64, extent: f64) -> f64 {
        let min_size = self.config.min_size;
        let span = (-2.0f64).mul_add(min_size, extent);
        let raw = unit_interval(&mut *self.rng).mul_add(span, min_size);
        if !self.config.round_splits {
            return raw;
        }

        let lowest = (origin + min_size).ceil() - origin;
        let highest = (origin + extent - min_size).floor() - origin;
        if lowest > highest {
            return raw;
        }
        ((origin + raw).round() - origin).clamp(lowest, highest)
    }

    fn emit(&mut self, rect: Rect, depth: usize) -> Result<()> {
        if self.shapes.len() >= self.config.max_leaves {
            return Err(MosaicError::LimitExceeded {
                limit: "max_leaves",
                value: self.config.max_leaves,
            });
        }
        self.trace.max_depth_reached = self.trace.max_depth_reached.max(depth);
        let id = self.shapes.len();
        self.shapes.push(BaseShape { id, rect });
        Ok(())
    }
}

/// Subdivide `canvas` into leaf rectangles
///
/// Ids restart at 0 on every call. A canvas with a non-positive extent
/// yields no shapes.
///
/// # Errors
///
/// Returns `InvalidParameter` for an invalid configuration and
/// `LimitExceeded` if the run trips the depth or leaf guard
pub fn partition<R: Rng + ?Sized>(
    canvas: Rect,
    config: &PartitionConfig,
    rng: &mut R,
) -> Result<Vec<BaseShape>> {
    partition_traced(canvas, config, rng).map(|(shapes, _)| shapes)
}

/// Subdivide `canvas` and report how each leaf terminated
///
/// # Errors
///
/// Same conditions as [`partition`]
pub fn partition_traced<R: Rng + ?Sized>(
    canvas: Rect,
    config: &PartitionConfig,
    rng: &mut R,
) -> Result<(Vec<BaseShape>, PartitionTrace)> {
    config.validate()?;
    if canvas.is_empty() {
        return Ok((Vec::new(), PartitionTrace::default()));
    }

    let mut partitioner = Partitioner {
        config,
        rng,
        shapes: Vec::new(),
        trace: PartitionTrace::default(),
    };
    partitioner.subdivide(canvas, 0)?;

    Ok((partitioner.shapes, partitioner.trace))
}
