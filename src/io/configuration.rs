//! Generation constants and runtime configuration defaults

// Partition heuristics
/// Chance that a rectangle already within the max size stops subdividing
pub const STOP_PROBABILITY: f64 = 0.9;

// Safety limits so oversized canvases fail fast instead of exhausting the stack
/// Maximum recursion depth of a single partition run
pub const MAX_PARTITION_DEPTH: usize = 64;
/// Maximum number of leaves a single partition run may emit
pub const MAX_PARTITION_LEAVES: usize = 1_000_000;

// Colors as RGBA
/// Background color used for blank shapes and uncovered pixels
pub const NEUTRAL_RGBA: [u8; 4] = [0xf2, 0xf2, 0xf2, 0xff];
/// Single palette entry substituted when the palette is empty
pub const FALLBACK_RGBA: [u8; 4] = [0x80, 0x80, 0x80, 0xff];
/// Palette used when none is supplied on the command line
pub const DEFAULT_PALETTE: &str = "#264653,#2a9d8f,#e9c46a,#f4a261,#e76f51";

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;
/// Default canvas width in pixels
pub const DEFAULT_WIDTH: u32 = 800;
/// Default canvas height in pixels
pub const DEFAULT_HEIGHT: u32 = 600;
/// Default minimum shape side
pub const DEFAULT_MIN_SIZE: f64 = 40.0;
/// Default maximum shape side
pub const DEFAULT_MAX_SIZE: f64 = 200.0;
/// Default blank percentage
pub const DEFAULT_BLANK_PERCENT: u8 = 20;
/// Default number of variations per invocation
pub const DEFAULT_COUNT: u32 = 1;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Output settings
/// Prefix of every output filename
pub const OUTPUT_PREFIX: &str = "mosaic";
/// Suffix added to sweep animation filenames
pub const SWEEP_SUFFIX: &str = "_sweep";
/// Number of blank-fraction steps in a sweep animation
pub const SWEEP_STEPS: usize = 20;
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 120;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;
