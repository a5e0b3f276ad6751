//! Unit-resolution coverage raster for checking that shapes tile a canvas
//!
//! Every shape is stamped into a hit-count grid; a valid tiling leaves every
//! cell covered exactly once. This catches gaps and overlaps that an area sum
//! alone would let cancel out.

use ndarray::Array2;
use num_traits::ToPrimitive;

use crate::io::error::{MosaicError, Result, invalid_parameter};
use crate::spatial::Rect;

/// Hit-count grid over an integer-aligned canvas
#[derive(Debug, Clone)]
pub struct CoverageGrid {
    /// Canvas the grid covers
    canvas: Rect,
    /// Hit counts indexed by (row, col) relative to the canvas origin
    counts: Array2<u32>,
}

/// Convert an integer-valued coordinate to a grid index
fn to_index(parameter: &'static str, value: f64) -> Result<usize> {
    value
        .to_usize()
        .ok_or_else(|| invalid_parameter(parameter, &value, &"not a representable grid index"))
}

impl CoverageGrid {
    /// Create an empty grid for `canvas`
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the canvas edges are not on integer coordinates
    pub fn new(canvas: Rect) -> Result<Self> {
        if !canvas.is_integer_aligned() {
            return Err(invalid_parameter(
                "canvas",
                &format!("{canvas:?}"),
                &"coverage can only be checked on integer-aligned canvases",
            ));
        }
        let rows = to_index("canvas.height", canvas.height.max(0.0))?;
        let cols = to_index("canvas.width", canvas.width.max(0.0))?;

        Ok(Self {
            canvas,
            counts: Array2::zeros((rows, cols)),
        })
    }

    /// Stamp one rectangle into the grid
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the rectangle is not integer-aligned or
    /// extends beyond the canvas
    pub fn add(&mut self, rect: &Rect) -> Result<()> {
        if !rect.is_integer_aligned() || !self.canvas.contains_rect(rect) {
            return Err(invalid_parameter(
                "shape",
                &format!("{rect:?}"),
                &"shape must be integer-aligned and inside the canvas",
            ));
        }

        let col_start = to_index("shape.x", rect.x - self.canvas.x)?;
        let row_start = to_index("shape.y", rect.y - self.canvas.y)?;
        let col_end = to_index("shape.right", rect.right() - self.canvas.x)?;
        let row_end = to_index("shape.bottom", rect.bottom() - self.canvas.y)?;

        for row in row_start..row_end {
            for col in col_start..col_end {
                if let Some(count) = self.counts.get_mut([row, col]) {
                    *count += 1;
                }
            }
        }
        Ok(())
    }

    /// Build a grid from a canvas and every rectangle placed on it
    ///
    /// # Errors
    ///
    /// Propagates errors from [`CoverageGrid::new`] and [`CoverageGrid::add`]
    pub fn from_rects<'a>(canvas: Rect, rects: impl IntoIterator<Item = &'a Rect>) -> Result<Self> {
        let mut grid = Self::new(canvas)?;
        for rect in rects {
            grid.add(rect)?;
        }
        Ok(grid)
    }

    /// Hit count of the cell at (`x`, `y`) relative to the canvas origin
    pub fn count_at(&self, x: usize, y: usize) -> Option<u32> {
        self.counts.get([y, x]).copied()
    }

    /// Grid dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        self.counts.dim()
    }

    /// Check that every cell is covered exactly once
    ///
    /// Cells are scanned in row-major order and the first violation is reported.
    ///
    /// # Errors
    ///
    /// Returns `CoverageViolation` for the first gap or overlap found
    pub fn verify(&self) -> Result<()> {
        match self
            .counts
            .indexed_iter()
            .find(|(_, count)| **count != 1)
        {
            Some(((y, x), &count)) => Err(MosaicError::CoverageViolation { x, y, count }),
            None => Ok(()),
        }
    }
}
