//! Geometry generation for mosaics

/// Recursive subdivision of a canvas into leaf rectangles
pub mod engine;
/// Layout generation combining partition and stable order
pub mod layout;
/// Fisher-Yates shuffle and stable id ordering
pub mod shuffle;

pub use engine::{BaseShape, PartitionConfig, PartitionTrace, partition};
pub use layout::{Layout, regenerate_layout};
pub use shuffle::StableIndexOrder;
