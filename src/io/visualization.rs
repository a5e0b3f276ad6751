//! Animated blank-fraction sweeps over a fixed layout
//!
//! Every frame reuses the same layout and stable order, so the animation
//! shows shapes turning blank one by one while the rest keep their color.

use std::path::Path;

use image::{Delay, Frame, RgbaImage};

use crate::io::configuration::VIEWER_MIN_FRAME_DELAY_MS;
use crate::io::error::{MosaicError, Result, invalid_parameter};
use crate::io::image::render_shapes;
use crate::partition::Layout;
use crate::style::{BlankFraction, Palette, ShapeKind, compute_styled_shapes};

/// Rendered frames of a sweep from 0% to 100% blank
pub struct BlankSweep {
    frames: Vec<RgbaImage>,
    blank_counts: Vec<usize>,
}

impl BlankSweep {
    /// Render `steps + 1` evenly spaced blank fractions, both ends included
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `steps` is zero or the canvas cannot be rendered
    pub fn record(
        layout: &Layout,
        palette: &Palette,
        kind: ShapeKind,
        steps: usize,
        gutter: f64,
    ) -> Result<Self> {
        if steps == 0 {
            return Err(invalid_parameter(
                "steps",
                &steps,
                &"a sweep needs at least one step",
            ));
        }

        let mut frames = Vec::with_capacity(steps + 1);
        let mut blank_counts = Vec::with_capacity(steps + 1);
        for step in 0..=steps {
            let blank = BlankFraction::from_fraction(step as f64 / steps as f64);
            let styled = compute_styled_shapes(
                layout.shapes(),
                layout.order(),
                palette,
                blank,
                kind,
            );
            blank_counts.push(styled.iter().filter(|shape| shape.is_blank()).count());
            frames.push(render_shapes(&layout.canvas(), &styled, gutter)?);
        }

        Ok(Self {
            frames,
            blank_counts,
        })
    }

    /// Number of recorded frames
    pub const fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Blank shape count of each frame, in frame order
    pub fn blank_counts(&self) -> &[usize] {
        &self.blank_counts
    }

    /// Encode the frames as a looping GIF
    ///
    /// Delays below what common viewers honour are raised to
    /// `VIEWER_MIN_FRAME_DELAY_MS`; the final frame is held five times longer.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No frames were recorded
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path, frame_delay_ms: u32) -> Result<()> {
        if self.frames.is_empty() {
            return Err(invalid_parameter(
                "frames",
                &0,
                &"no frames recorded for the sweep",
            ));
        }

        let delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let last = self.frames.len() - 1;
        let frames = self.frames.iter().enumerate().map(|(index, img)| {
            let hold = if index == last { delay_ms.saturating_mul(5) } else { delay_ms };
            Frame::from_parts(img.clone(), 0, 0, Delay::from_numer_denom_ms(hold, 1))
        });

        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| MosaicError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = std::fs::File::create(output_path).map_err(|e| MosaicError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .set_repeat(image::codecs::gif::Repeat::Infinite)
            .and_then(|()| encoder.encode_frames(frames))
            .map_err(|e| MosaicError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }
}
