//! Spatial primitives and layout validation
//!
//! This module contains spatial-related functionality including:
//! - Axis-aligned rectangle geometry and splitting
//! - Raster coverage checks for complete tilings

/// Unit-resolution coverage raster
pub mod coverage;
/// Axis-aligned rectangle type
pub mod rect;

pub use coverage::CoverageGrid;
pub use rect::Rect;
