/// Command-line interface and batch processing
pub mod cli;
/// Generation constants and runtime defaults
pub mod configuration;
/// Error types for mosaic operations
pub mod error;
/// Rasterization and PNG export
pub mod image;
/// Progress display for batch runs
pub mod progress;
/// Animated blank-fraction sweeps
pub mod visualization;
