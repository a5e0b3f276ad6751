//! Command-line interface for batch mosaic generation

use crate::io::configuration::{
    DEFAULT_BLANK_PERCENT, DEFAULT_COUNT, DEFAULT_HEIGHT, DEFAULT_MAX_SIZE, DEFAULT_MIN_SIZE,
    DEFAULT_PALETTE, DEFAULT_SEED, DEFAULT_WIDTH, GIF_FRAME_DELAY_MS, OUTPUT_PREFIX, SWEEP_STEPS,
    SWEEP_SUFFIX,
};
use crate::io::error::Result;
use crate::io::image::{export_png, render_shapes};
use crate::io::progress::ProgressManager;
use crate::io::visualization::BlankSweep;
use crate::partition::Layout;
use crate::state::{MosaicState, SizeBounds};
use crate::style::{BlankFraction, Palette, ShapeKind, StyledShape};
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "mosaictile")]
#[command(
    author,
    version,
    about = "Generate rectangle mosaics with stable blank-fraction styling"
)]
/// Command-line arguments for the mosaic generator
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Canvas width in pixels
    #[arg(short = 'w', long, default_value_t = DEFAULT_WIDTH,
          value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Canvas height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT,
          value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Smallest side a split may produce
    #[arg(long, default_value_t = DEFAULT_MIN_SIZE)]
    pub min_size: f64,

    /// Largest side a shape may keep (raised to --min-size if smaller)
    #[arg(long, default_value_t = DEFAULT_MAX_SIZE)]
    pub max_size: f64,

    /// Comma-separated hex colors; an empty list uses a single fallback gray
    #[arg(short, long, default_value = DEFAULT_PALETTE)]
    pub palette: String,

    /// Percentage of shapes rendered blank
    #[arg(short, long, default_value_t = DEFAULT_BLANK_PERCENT,
          value_parser = clap::value_parser!(u8).range(0..=100))]
    pub blank: u8,

    /// Shape treatment applied to every rectangle
    #[arg(short, long, value_enum, default_value_t = ShapeKind::Rectangle)]
    pub kind: ShapeKind,

    /// Background seam left between neighbouring shapes, in pixels
    #[arg(short, long, default_value_t = 0.0)]
    pub gutter: f64,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of layout variations to generate
    #[arg(short = 'n', long, default_value_t = DEFAULT_COUNT,
          value_parser = clap::value_parser!(u32).range(1..))]
    pub count: u32,

    /// Directory receiving the generated images
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Also export an animated GIF sweeping the blank fraction from 0% to 100%
    #[arg(short, long)]
    pub visualize: bool,

    /// Check that every layout tiles its canvas exactly
    #[arg(long)]
    pub verify: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Regenerate variations whose outputs already exist
    #[arg(long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Blank fraction requested on the command line
    pub fn blank_fraction(&self) -> BlankFraction {
        BlankFraction::from_percent(self.blank)
    }

    /// Path of the PNG for variation `index`
    pub fn output_path(&self, index: u32) -> PathBuf {
        self.output
            .join(format!("{OUTPUT_PREFIX}_{}_{index}.png", self.seed))
    }

    /// Path of the sweep GIF for variation `index`
    pub fn sweep_path(&self, index: u32) -> PathBuf {
        self.output.join(format!(
            "{OUTPUT_PREFIX}_{}_{index}{SWEEP_SUFFIX}.gif",
            self.seed
        ))
    }
}

/// One-line report for a generated variation
pub fn summary_line(path: &Path, layout: &Layout, styled: &[StyledShape]) -> String {
    let name = path.file_name().unwrap_or_default().to_string_lossy();
    let blank = styled.iter().filter(|shape| shape.is_blank()).count();
    let trace = layout.trace();
    let oversized = if trace.oversized > 0 {
        format!(", {} oversized", trace.oversized)
    } else {
        String::new()
    };
    format!(
        "{name}: {} shapes, depth {}, {blank} blank{oversized}",
        layout.len(),
        trace.max_depth_reached
    )
}

/// Drives layout generation, styling and export for every requested variation
pub struct MosaicProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl MosaicProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate every variation according to CLI arguments
    ///
    /// Layouts are drawn in sequence from one seeded generator, so variation
    /// `i` is identical whether or not earlier outputs were skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments are invalid or any generation,
    /// verification or export step fails
    pub fn process(&mut self) -> Result<()> {
        let palette = Palette::parse(&self.cli.palette)?;
        let bounds = SizeBounds::new(self.cli.min_size, self.cli.max_size)?;
        if bounds.max() > self.cli.max_size {
            self.notify(&format!(
                "max-size {} is below min-size; using {}",
                self.cli.max_size,
                bounds.max()
            ));
        }

        let mut state = MosaicState::new(
            self.cli.seed,
            f64::from(self.cli.width),
            f64::from(self.cli.height),
            bounds,
        )?;
        state.set_palette(palette);
        state.set_blank_fraction(self.cli.blank_fraction());
        state.set_kind(self.cli.kind);

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(self.cli.count as usize);
        }

        for index in 0..self.cli.count {
            self.process_variation(&mut state, index)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn process_variation(&mut self, state: &mut MosaicState, index: u32) -> Result<()> {
        let output_path = self.cli.output_path(index);
        let slot = index as usize;

        // Regenerate even when skipping so later variations keep their layouts
        state.regenerate()?;

        let sweep_ready = !self.cli.visualize || self.cli.sweep_path(index).exists();
        if self.cli.skip_existing() && output_path.exists() && sweep_ready {
            self.notify(&format!(
                "Skipping: {} (output exists)",
                output_path.display()
            ));
            return Ok(());
        }

        let stage_count = 3 + usize::from(self.cli.verify) + usize::from(self.cli.visualize);
        if let Some(ref mut pm) = self.progress_manager {
            let label = output_path
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string();
            pm.start_variation(slot, &label, stage_count);
            pm.advance(slot, "partitioned");
        }

        if self.cli.verify {
            state.layout()?.verify_coverage()?;
            self.advance(slot, "verified");
        }

        let styled = state.styled_shapes()?;
        self.advance(slot, "styled");

        let layout = state.current_layout();
        let img = render_shapes(&layout.canvas(), &styled, self.cli.gutter)?;
        export_png(&img, &output_path)?;
        self.advance(slot, "exported");

        if self.cli.visualize {
            let sweep = BlankSweep::record(
                layout,
                state.palette(),
                state.kind(),
                SWEEP_STEPS,
                self.cli.gutter,
            )?;
            sweep.export_gif(&self.cli.sweep_path(index), GIF_FRAME_DELAY_MS)?;
            self.advance(slot, "animated");
        }

        let summary = summary_line(&output_path, layout, &styled);
        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_variation(slot);
            pm.println(&summary);
        }

        Ok(())
    }

    fn advance(&mut self, slot: usize, stage: &str) {
        if let Some(ref mut pm) = self.progress_manager {
            pm.advance(slot, stage);
        }
    }

    fn notify(&self, line: &str) {
        if let Some(ref pm) = self.progress_manager {
            pm.println(line);
        }
    }
}
