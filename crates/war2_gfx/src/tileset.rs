//! Decoding of era tilesets.

use std::fmt;

use tracing::{debug, trace};
use war2_dat::{Color, Palette, WarArchive};

use crate::{
    error::{Error, Result},
    layout,
    pixels::colorize,
};

/// The landscapes a tileset can draw
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Era {
    /// Summer forests
    Forest,
    /// Snowed over forests
    Winter,
    /// Scorched wasteland
    Wasteland,
    /// Swamps, only present in expansion archives
    Swamp,
}

impl fmt::Display for Era {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Era::Forest => "forest",
            Era::Winter => "winter",
            Era::Wasteland => "wasteland",
            Era::Swamp => "swamp",
        };
        write!(f, "{name}")
    }
}

/// Context of one tileset decode call
///
/// Built before the first callback runs, passed by reference to every
/// callback invocation, and returned when the call finishes.
#[derive(Debug, Clone)]
pub struct TilesetDescriptor {
    /// The era the tileset draws
    pub era: Era,
    /// The palette the tiles are colored with
    pub palette: Palette,
    /// Number of tiles in the tileset
    pub tiles: usize,
}

/// Decode the tileset of an era, handing every tile to `draw`.
///
/// `draw` is called once per tile, in storage order, with the colored pixels
/// in row major order, the tile width and height in pixels, the descriptor,
/// and the image number counting up from 0. The pixel slice is reused
/// between tiles, a callback that keeps pixels around must copy them.
pub fn decode_tileset<F>(archive: &WarArchive, era: Era, mut draw: F) -> Result<TilesetDescriptor>
where
    F: FnMut(&[Color], u32, u32, &TilesetDescriptor, usize),
{
    let palette_entry = layout::era_palette_entry(era);
    if palette_entry + 1 >= archive.len() {
        return Err(Error::UnsupportedEra(era));
    }

    let palette = archive.palette(palette_entry)?;
    let graphics = archive.entry(palette_entry + 1)?;

    let descriptor = TilesetDescriptor {
        era,
        palette,
        tiles: graphics.len() / layout::TILE_BYTES,
    };

    if archive.verbosity() >= 1 {
        debug!(era = %era, tiles = descriptor.tiles, "decoding tileset");
    }

    let mut pixels = Vec::with_capacity(layout::TILE_BYTES);
    for (number, tile) in graphics.chunks_exact(layout::TILE_BYTES).enumerate() {
        if archive.verbosity() >= 2 {
            trace!(number, "tile");
        }

        colorize(&descriptor.palette, tile, &mut pixels)?;
        draw(
            &pixels,
            layout::TILE_SIDE as u32,
            layout::TILE_SIDE as u32,
            &descriptor,
            number,
        );
    }

    Ok(descriptor)
}
