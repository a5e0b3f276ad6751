//! Rasterization of styled shapes and PNG export

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};
use num_traits::ToPrimitive;

use crate::io::error::{MosaicError, Result, invalid_parameter};
use crate::spatial::Rect;
use crate::style::{Color, ShapeKind, StyledShape};

/// Pixel dimensions of a canvas, rounding partial pixels up
///
/// # Errors
///
/// Returns `InvalidParameter` if a side is negative, non-finite or does not fit in `u32`
pub fn canvas_pixels(canvas: &Rect) -> Result<(u32, u32)> {
    let width = canvas
        .width
        .ceil()
        .to_u32()
        .ok_or_else(|| invalid_parameter("canvas_width", &canvas.width, &"not a pixel count"))?;
    let height = canvas
        .height
        .ceil()
        .to_u32()
        .ok_or_else(|| invalid_parameter("canvas_height", &canvas.height, &"not a pixel count"))?;
    Ok((width, height))
}

/// Clamp a real coordinate range to pixel indices `[start, end)` within `0..limit`
fn pixel_span(start: f64, end: f64, limit: u32) -> (u32, u32) {
    let first = start.floor().max(0.0).to_u32().unwrap_or(0).min(limit);
    let last = end.ceil().max(0.0).to_u32().unwrap_or(limit).min(limit);
    (first, last)
}

// Pixel centers decide coverage so adjacent shapes never paint the same pixel
fn covers(kind: ShapeKind, rect: &Rect, px: f64, py: f64) -> bool {
    match kind {
        ShapeKind::Rectangle => {
            px >= rect.x && px < rect.right() && py >= rect.y && py < rect.bottom()
        }
        ShapeKind::Ellipse => {
            let rx = rect.width / 2.0;
            let ry = rect.height / 2.0;
            if rx <= 0.0 || ry <= 0.0 {
                return false;
            }
            let dx = (px - (rect.x + rx)) / rx;
            let dy = (py - (rect.y + ry)) / ry;
            dx.mul_add(dx, dy * dy) <= 1.0
        }
    }
}

/// Paint styled shapes onto a neutral canvas
///
/// Each shape is inset by half of `gutter` on every side, leaving a
/// `gutter`-wide seam of background between neighbours.
///
/// # Errors
///
/// Returns `InvalidParameter` if the canvas cannot be expressed in pixels
pub fn render_shapes(canvas: &Rect, shapes: &[StyledShape], gutter: f64) -> Result<RgbaImage> {
    let (width, height) = canvas_pixels(canvas)?;
    let mut img: RgbaImage =
        ImageBuffer::from_pixel(width, height, Rgba(Color::NEUTRAL.to_rgba()));
    let inset = gutter.max(0.0) / 2.0;

    for styled in shapes {
        let outer = styled.rect();
        let rect = Rect::new(
            outer.x - canvas.x + inset,
            outer.y - canvas.y + inset,
            (-2.0f64).mul_add(inset, outer.width),
            (-2.0f64).mul_add(inset, outer.height),
        );
        if rect.is_empty() {
            continue;
        }

        let color = Rgba(styled.color().to_rgba());
        let (col_start, col_end) = pixel_span(rect.x, rect.right(), width);
        let (row_start, row_end) = pixel_span(rect.y, rect.bottom(), height);

        for row in row_start..row_end {
            for col in col_start..col_end {
                let px = f64::from(col) + 0.5;
                let py = f64::from(row) + 0.5;
                if covers(styled.kind, &rect, px, py) {
                    img.put_pixel(col, row, color);
                }
            }
        }
    }

    Ok(img)
}

/// Save a rendered image as PNG, creating parent directories
///
/// # Errors
///
/// Returns `FileSystem` if the parent directory cannot be created and
/// `ImageExport` if encoding or writing fails
pub fn export_png(img: &RgbaImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| MosaicError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| MosaicError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
