//! Palette entries and the colors they contain.

use crate::error::{Error, Result};

/// A single RGBA color from a palette
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel
    pub a: u8,
}

impl Color {
    /// Create a fully opaque color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }
}

/// A 256 color palette decoded from an archive entry
///
/// Palette entries store 256 RGB triplets of 6-bit VGA DAC values. Decoding
/// scales each channel up to the full 8-bit range and fixes alpha at `0xFF`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: [Color; Self::COLORS],
}

impl Palette {
    /// Number of colors in a palette
    pub const COLORS: usize = 256;

    /// Size of a palette entry on disk, in bytes
    pub const BYTES: usize = Self::COLORS * 3;

    /// Decode a palette from the raw bytes of an archive entry
    ///
    /// The entry must be exactly [`Palette::BYTES`] long, anything else
    /// fails with [`Error::MalformedPalette`].
    pub fn from_raw(raw: &[u8]) -> Result<Self> {
        if raw.len() != Self::BYTES {
            return Err(Error::MalformedPalette { len: raw.len() });
        }

        let mut colors = [Color::default(); Self::COLORS];
        for (color, rgb) in colors.iter_mut().zip(raw.chunks_exact(3)) {
            *color = Color::rgb(rgb[0] << 2, rgb[1] << 2, rgb[2] << 2);
        }

        Ok(Self { colors })
    }

    /// Get a color by palette index, if it's present
    pub fn color(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    /// All colors in palette order
    pub fn colors(&self) -> &[Color; Self::COLORS] {
        &self.colors
    }

    /// Mutable access to the colors, in palette order
    pub fn colors_mut(&mut self) -> &mut [Color; Self::COLORS] {
        &mut self.colors
    }
}
