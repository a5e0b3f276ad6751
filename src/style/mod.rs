//! Styling layer mapping shapes to colors and render kinds

/// Pure style derivation with stable blank selection
pub mod assignment;
/// Hex colors and palettes
pub mod palette;

pub use assignment::{BlankFraction, Fill, ShapeKind, StyledShape, compute_styled_shapes};
pub use palette::{Color, Palette};
