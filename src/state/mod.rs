//! Explicit recomputation model tracking which inputs changed

/// Coupled min/max size bounds
pub mod bounds;
/// Mosaic inputs with lazily regenerated layout
pub mod mosaic;

pub use bounds::SizeBounds;
pub use mosaic::MosaicState;
