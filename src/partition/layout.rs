//! Geometry generation: partition plus stable order as one unit
//!
//! A [`Layout`] is only ever built whole, so the shapes and the order used
//! to pick blank shapes always come from the same run.

use rand::Rng;

use crate::io::error::{Result, invalid_parameter};
use crate::partition::engine::{BaseShape, PartitionConfig, PartitionTrace, partition_traced};
use crate::partition::shuffle::StableIndexOrder;
use crate::spatial::{CoverageGrid, Rect};

/// Immutable result of one geometry generation
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    canvas: Rect,
    shapes: Vec<BaseShape>,
    order: StableIndexOrder,
    trace: PartitionTrace,
}

impl Layout {
    /// Partition `canvas` and shuffle the resulting ids
    ///
    /// # Errors
    ///
    /// Propagates configuration and recursion-guard errors from the partition
    pub fn generate<R: Rng + ?Sized>(
        canvas: Rect,
        config: &PartitionConfig,
        rng: &mut R,
    ) -> Result<Self> {
        let (shapes, trace) = partition_traced(canvas, config, rng)?;
        let order = StableIndexOrder::shuffled(&shapes, rng);

        Ok(Self {
            canvas,
            shapes,
            order,
            trace,
        })
    }

    /// Layout with no shapes, used before the first generation
    pub fn empty(canvas: Rect) -> Self {
        Self {
            canvas,
            shapes: Vec::new(),
            order: StableIndexOrder::default(),
            trace: PartitionTrace::default(),
        }
    }

    /// Canvas the layout was generated for
    pub const fn canvas(&self) -> Rect {
        self.canvas
    }

    /// Leaf shapes in id order
    pub fn shapes(&self) -> &[BaseShape] {
        &self.shapes
    }

    /// Stable order of shape ids
    pub const fn order(&self) -> &StableIndexOrder {
        &self.order
    }

    /// Termination statistics from the partition run
    pub const fn trace(&self) -> &PartitionTrace {
        &self.trace
    }

    /// Number of shapes
    pub const fn len(&self) -> usize {
        self.shapes.len()
    }

    /// True when the layout holds no shapes
    pub const fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Sum of shape areas
    pub fn total_area(&self) -> f64 {
        self.shapes.iter().map(|shape| shape.rect.area()).sum()
    }

    /// Check that the shapes tile the canvas with no gaps or overlaps
    ///
    /// An empty layout of a degenerate canvas passes trivially.
    ///
    /// # Errors
    ///
    /// Returns `CoverageViolation` on the first bad cell, or
    /// `InvalidParameter` if the layout is not integer-aligned
    pub fn verify_coverage(&self) -> Result<()> {
        if self.canvas.is_empty() {
            return Ok(());
        }
        CoverageGrid::from_rects(self.canvas, self.shapes.iter().map(|shape| &shape.rect))?
            .verify()
    }
}

/// Generate a fresh layout for a canvas at the origin
///
/// A canvas with a non-positive side yields an empty layout; sizes are
/// validated first so an invalid `min_size` is reported even then.
///
/// # Errors
///
/// Returns `InvalidParameter` for non-finite canvas sides or invalid sizes
/// and `LimitExceeded` if the partition trips a recursion guard
pub fn regenerate_layout<R: Rng + ?Sized>(
    canvas_width: f64,
    canvas_height: f64,
    min_size: f64,
    max_size: f64,
    rng: &mut R,
) -> Result<Layout> {
    let config = PartitionConfig::new(min_size, max_size)?;
    regenerate_layout_with(canvas_width, canvas_height, &config, rng)
}

/// Generate a fresh layout with explicit partition heuristics
///
/// # Errors
///
/// Same conditions as [`regenerate_layout`]
pub fn regenerate_layout_with<R: Rng + ?Sized>(
    canvas_width: f64,
    canvas_height: f64,
    config: &PartitionConfig,
    rng: &mut R,
) -> Result<Layout> {
    config.validate()?;
    for (parameter, value) in [("canvas_width", canvas_width), ("canvas_height", canvas_height)] {
        if !value.is_finite() {
            return Err(invalid_parameter(parameter, &value, &"must be finite"));
        }
    }

    Layout::generate(Rect::from_size(canvas_width, canvas_height), config, rng)
}
