//! Recursive rectangle mosaics with stable, flicker-free styling
//!
//! A canvas is partitioned into non-overlapping rectangles that respect a
//! minimum and maximum side length. Each partition run also shuffles the
//! shape ids once; the styling layer blanks a prefix of that order, so
//! changing the blank fraction adds or removes specific shapes while every
//! other shape keeps its palette color.

#![forbid(unsafe_code)]

/// Input/output operations, configuration and error handling
pub mod io;
/// Mathematical utilities for random trials and goodness-of-fit checks
pub mod math;
/// Recursive partition engine and stable id ordering
pub mod partition;
/// Spatial primitives and coverage verification
pub mod spatial;
/// Explicit recomputation model over mosaic inputs
pub mod state;
/// Palette and blank-fraction styling of partitioned shapes
pub mod style;

pub use io::error::{MosaicError, Result};
