//! Hex colors and ordered palettes

use std::fmt;
use std::str::FromStr;

use crate::io::configuration::{FALLBACK_RGBA, NEUTRAL_RGBA};
use crate::io::error::{MosaicError, Result};

/// RGBA color with 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel (255 = opaque)
    pub a: u8,
}

impl Color {
    /// Background color given to blank shapes
    pub const NEUTRAL: Self = Self::from_rgba(NEUTRAL_RGBA);
    /// Color substituted for an empty palette
    pub const FALLBACK: Self = Self::from_rgba(FALLBACK_RGBA);

    /// Build a color from its channels
    pub const fn from_rgba(rgba: [u8; 4]) -> Self {
        let [r, g, b, a] = rgba;
        Self { r, g, b, a }
    }

    /// Channels as an `[r, g, b, a]` array
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Parse a run of hex digits, one digit per channel when `short`
fn parse_channels(digits: &str, short: bool) -> Option<Vec<u8>> {
    let width = if short { 1 } else { 2 };
    let bytes = digits.as_bytes();
    bytes
        .chunks(width)
        .map(|chunk| {
            let text = std::str::from_utf8(chunk).ok()?;
            let value = u8::from_str_radix(text, 16).ok()?;
            Some(if short { value * 17 } else { value })
        })
        .collect()
}

impl FromStr for Color {
    type Err = MosaicError;

    /// Accepts `#rgb`, `#rgba`, `#rrggbb` and `#rrggbbaa`
    fn from_str(input: &str) -> Result<Self> {
        let invalid = |reason| MosaicError::InvalidColor {
            input: input.to_string(),
            reason,
        };

        let digits = input
            .trim()
            .strip_prefix('#')
            .ok_or_else(|| invalid("expected a leading '#'"))?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid("expected hexadecimal digits"));
        }

        let short = match digits.len() {
            3 | 4 => true,
            6 | 8 => false,
            _ => return Err(invalid("expected 3, 4, 6 or 8 hexadecimal digits")),
        };
        let channels =
            parse_channels(digits, short).ok_or_else(|| invalid("expected hexadecimal digits"))?;

        match channels.as_slice() {
            [r, g, b] => Ok(Self::from_rgba([*r, *g, *b, u8::MAX])),
            [r, g, b, a] => Ok(Self::from_rgba([*r, *g, *b, *a])),
            _ => Err(invalid("expected 3 or 4 channels")),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if self.a != u8::MAX {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

/// Ordered color list; order decides which palette slot each shape id gets
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Wrap an ordered list of colors
    pub const fn new(colors: Vec<Color>) -> Self {
        Self { colors }
    }

    /// Parse a comma-separated list of hex colors
    ///
    /// Blank entries are skipped, so an empty string gives an empty palette.
    ///
    /// # Errors
    ///
    /// Returns `InvalidColor` for the first entry that is not a hex color
    pub fn parse(list: &str) -> Result<Self> {
        list.split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(Color::from_str)
            .collect::<Result<Vec<_>>>()
            .map(Self::new)
    }

    /// Colors in palette order
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Number of colors
    pub const fn len(&self) -> usize {
        self.colors.len()
    }

    /// True when the palette holds no colors
    pub const fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Palette slot and color for a shape id
    ///
    /// An empty palette behaves as a single-entry palette holding
    /// [`Color::FALLBACK`].
    pub fn slot_for(&self, id: usize) -> (usize, Color) {
        if self.colors.is_empty() {
            return (0, Color::FALLBACK);
        }
        let slot = id % self.colors.len();
        (
            slot,
            self.colors.get(slot).copied().unwrap_or(Color::FALLBACK),
        )
    }
}
