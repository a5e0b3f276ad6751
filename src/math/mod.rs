//! Mathematical utilities for the generator

/// Random trials and goodness-of-fit statistics
pub mod probability;
