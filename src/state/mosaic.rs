//! Input tracking and on-demand recomputation of the mosaic
//!
//! Geometry inputs (canvas, size bounds) invalidate the layout; style inputs
//! (palette, blank fraction, kind) only affect the derived shapes. The layout
//! is rebuilt lazily and swapped in whole, so styling never sees shapes and
//! an order from different runs.

use rand::{SeedableRng, rngs::StdRng};

use crate::io::error::{Result, invalid_parameter};
use crate::partition::{Layout, PartitionConfig};
use crate::spatial::Rect;
use crate::state::bounds::SizeBounds;
use crate::style::{BlankFraction, Palette, ShapeKind, StyledShape, compute_styled_shapes};

/// Every configuration input plus the current layout
#[derive(Debug, Clone)]
pub struct MosaicState {
    canvas: Rect,
    bounds: SizeBounds,
    stop_probability: Option<f64>,
    palette: Palette,
    blank: BlankFraction,
    kind: ShapeKind,
    rng: StdRng,
    layout: Layout,
    geometry_dirty: bool,
    generation: u64,
}

impl MosaicState {
    /// Create state for a canvas with seeded randomness
    ///
    /// The first layout is generated on first access.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for non-finite canvas sides or invalid size bounds
    pub fn new(
        seed: u64,
        canvas_width: f64,
        canvas_height: f64,
        bounds: SizeBounds,
    ) -> Result<Self> {
        let mut state = Self {
            canvas: Rect::from_size(0.0, 0.0),
            bounds,
            stop_probability: None,
            palette: Palette::default(),
            blank: BlankFraction::NONE,
            kind: ShapeKind::default(),
            rng: StdRng::seed_from_u64(seed),
            layout: Layout::empty(Rect::from_size(0.0, 0.0)),
            geometry_dirty: true,
            generation: 0,
        };
        state.set_canvas(canvas_width, canvas_height)?;
        Ok(state)
    }

    /// Resize the canvas
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if either side is not finite
    pub fn set_canvas(&mut self, width: f64, height: f64) -> Result<()> {
        for (parameter, value) in [("canvas_width", width), ("canvas_height", height)] {
            if !value.is_finite() {
                return Err(invalid_parameter(parameter, &value, &"must be finite"));
            }
        }
        let canvas = Rect::from_size(width, height);
        if canvas != self.canvas {
            self.canvas = canvas;
            self.geometry_dirty = true;
        }
        Ok(())
    }

    /// Move the minimum size, dragging the maximum up if crossed
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `min` is not a positive finite number
    pub fn set_min_size(&mut self, min: f64) -> Result<()> {
        let previous = self.bounds;
        self.bounds.set_min(min)?;
        self.geometry_dirty |= self.bounds != previous;
        Ok(())
    }

    /// Move the maximum size, dragging the minimum down if crossed
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `max` is not a positive finite number
    pub fn set_max_size(&mut self, max: f64) -> Result<()> {
        let previous = self.bounds;
        self.bounds.set_max(max)?;
        self.geometry_dirty |= self.bounds != previous;
        Ok(())
    }

    /// Override the early-stop probability used by future layouts
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the probability lies outside [0, 1]
    pub fn set_stop_probability(&mut self, probability: f64) -> Result<()> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(invalid_parameter(
                "stop_probability",
                &probability,
                &"must lie in [0, 1]",
            ));
        }
        self.stop_probability = Some(probability);
        self.geometry_dirty = true;
        Ok(())
    }

    /// Replace the palette
    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }

    /// Replace the blank fraction
    pub const fn set_blank_fraction(&mut self, blank: BlankFraction) {
        self.blank = blank;
    }

    /// Replace the shape kind
    pub const fn set_kind(&mut self, kind: ShapeKind) {
        self.kind = kind;
    }

    /// Current size bounds
    pub const fn bounds(&self) -> SizeBounds {
        self.bounds
    }

    /// Current canvas
    pub const fn canvas(&self) -> Rect {
        self.canvas
    }

    /// Current palette
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Current blank fraction
    pub const fn blank_fraction(&self) -> BlankFraction {
        self.blank
    }

    /// Current shape kind
    pub const fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Number of layouts generated so far
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// True when the next access will rebuild the layout
    pub const fn needs_regeneration(&self) -> bool {
        self.geometry_dirty
    }

    fn partition_config(&self) -> Result<PartitionConfig> {
        let config = PartitionConfig::new(self.bounds.min(), self.bounds.max())?;
        Ok(self
            .stop_probability
            .map_or(config, |probability| config.with_stop_probability(probability)))
    }

    /// Build a new layout and commit it, discarding the old one
    ///
    /// On error the previous layout stays in place and remains marked stale.
    ///
    /// # Errors
    ///
    /// Propagates partition errors such as `LimitExceeded`
    pub fn regenerate(&mut self) -> Result<&Layout> {
        let config = self.partition_config()?;
        let layout = Layout::generate(self.canvas, &config, &mut self.rng)?;

        self.layout = layout;
        self.generation += 1;
        self.geometry_dirty = false;
        Ok(&self.layout)
    }

    /// Current layout, regenerating it first if geometry inputs changed
    ///
    /// # Errors
    ///
    /// Propagates errors from [`MosaicState::regenerate`]
    pub fn layout(&mut self) -> Result<&Layout> {
        if self.geometry_dirty {
            self.regenerate()?;
        }
        Ok(&self.layout)
    }

    /// Last committed layout, without regenerating
    ///
    /// May be stale if geometry inputs changed since the last generation.
    pub const fn current_layout(&self) -> &Layout {
        &self.layout
    }

    /// Styled shapes for the current inputs
    ///
    /// # Errors
    ///
    /// Propagates errors from [`MosaicState::layout`]
    pub fn styled_shapes(&mut self) -> Result<Vec<StyledShape>> {
        if self.geometry_dirty {
            self.regenerate()?;
        }
        Ok(compute_styled_shapes(
            self.layout.shapes(),
            self.layout.order(),
            &self.palette,
            self.blank,
            self.kind,
        ))
    }
}
