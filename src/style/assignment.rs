//! Derivation of renderable shapes from a layout and style inputs
//!
//! Colors are keyed on shape id, never on the shuffled position, so a
//! change of blank fraction only flips shapes between blank and colored.

use std::fmt;

use clap::ValueEnum;

use crate::partition::{BaseShape, StableIndexOrder};
use crate::spatial::Rect;
use crate::style::palette::{Color, Palette};

/// Rendering treatment applied to every shape's bounding box
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum ShapeKind {
    /// Fill the whole bounding box
    #[default]
    #[value(alias = "rect")]
    Rectangle,
    /// Fill the ellipse inscribed in the bounding box
    #[value(alias = "circle")]
    Ellipse,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rectangle => f.write_str("rectangle"),
            Self::Ellipse => f.write_str("ellipse"),
        }
    }
}

/// Share of shapes rendered blank, clamped to [0, 1]
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct BlankFraction(f64);

impl BlankFraction {
    /// No shapes blank
    pub const NONE: Self = Self(0.0);
    /// Every shape blank
    pub const ALL: Self = Self(1.0);

    /// Clamp a fraction into [0, 1]; NaN becomes 0
    pub const fn from_fraction(fraction: f64) -> Self {
        if fraction.is_nan() {
            Self::NONE
        } else {
            Self(fraction.clamp(0.0, 1.0))
        }
    }

    /// Convert a 0-100 percentage; values above 100 clamp to 1
    pub fn from_percent(percent: u8) -> Self {
        Self::from_fraction(f64::from(percent) / 100.0)
    }

    /// The fraction as a real in [0, 1]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Number of blank shapes among `shape_count`: floor(N * fraction), at most N
    pub fn blank_count(self, shape_count: usize) -> usize {
        let count = (shape_count as f64 * self.0).floor() as usize;
        count.min(shape_count)
    }
}

/// Resolved fill of a styled shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    /// Palette color chosen by shape id
    Palette {
        /// Index into the effective palette
        slot: usize,
        /// Color at that slot
        color: Color,
    },
    /// Neutral background fill
    Blank,
}

impl Fill {
    /// Concrete color to paint
    pub const fn color(self) -> Color {
        match self {
            Self::Palette { color, .. } => color,
            Self::Blank => Color::NEUTRAL,
        }
    }
}

/// Base shape with its derived fill and kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyledShape {
    /// Geometry and id
    pub shape: BaseShape,
    /// Palette or blank fill
    pub fill: Fill,
    /// Rendering treatment
    pub kind: ShapeKind,
}

impl StyledShape {
    /// Shape id
    pub const fn id(&self) -> usize {
        self.shape.id
    }

    /// Bounding rectangle
    pub const fn rect(&self) -> Rect {
        self.shape.rect
    }

    /// Color to paint
    pub const fn color(&self) -> Color {
        self.fill.color()
    }

    /// True when the shape takes the neutral fill
    pub const fn is_blank(&self) -> bool {
        matches!(self.fill, Fill::Blank)
    }
}

/// Style every shape from the current inputs
///
/// The first `floor(N * blank)` ids of `order` go blank; every other shape
/// takes palette slot `id % palette.len()` (or the fallback color when the
/// palette is empty). Output follows the order of `shapes`.
pub fn compute_styled_shapes(
    shapes: &[BaseShape],
    order: &StableIndexOrder,
    palette: &Palette,
    blank: BlankFraction,
    kind: ShapeKind,
) -> Vec<StyledShape> {
    if shapes.is_empty() {
        return Vec::new();
    }

    let capacity = shapes.iter().map(|shape| shape.id + 1).max().unwrap_or(0);
    let blank_mask = order.prefix_mask(blank.blank_count(shapes.len()), capacity);

    shapes
        .iter()
        .map(|&shape| {
            let is_blank = blank_mask.get(shape.id).is_some_and(|bit| *bit);
            let fill = if is_blank {
                Fill::Blank
            } else {
                let (slot, color) = palette.slot_for(shape.id);
                Fill::Palette { slot, color }
            };
            StyledShape { shape, fill, kind }
        })
        .collect()
}
