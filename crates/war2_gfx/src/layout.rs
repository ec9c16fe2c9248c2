//! Where the graphics live inside the data archive.
//!
//! Entries in a WAR archive carry no names, so which entry holds which asset
//! is a convention between the game executable and `MAINDAT.WAR`. This module
//! reproduces that convention for the entries this crate decodes. The swamp
//! entries only exist in archives shipped with the expansion.

use crate::tileset::Era;
use crate::units::{PlayerColor, Race};
use war2_dat::Color;

/// Side of a square tile, in pixels
pub const TILE_SIDE: usize = 32;

/// Size of one tile in a tile graphics entry, in bytes
pub const TILE_BYTES: usize = TILE_SIDE * TILE_SIDE;

/// First palette index replaced by the player ramp
pub const RAMP_START: usize = 208;

/// Number of palette indices replaced by the player ramp
pub const RAMP_LEN: usize = 4;

/// Archive entry holding the palette used for unit sprites
pub const UNIT_PALETTE_ENTRY: usize = 2;

/// Archive entry holding the palette of an era
///
/// The tile graphics of the era are in the entry that follows.
pub fn era_palette_entry(era: Era) -> usize {
    match era {
        Era::Forest => 2,
        Era::Wasteland => 10,
        Era::Winter => 18,
        Era::Swamp => 438,
    }
}

/// Archive entry holding the sprite sheet of a race, if it has one
pub fn race_sheet_entry(race: Race) -> Option<usize> {
    match race {
        Race::Human => Some(33),
        Race::Orc => Some(34),
        Race::Neutral => None,
    }
}

/// The four ramp colors of a player, brightest first, if the color has a ramp
pub fn player_ramp(color: PlayerColor) -> Option<[Color; RAMP_LEN]> {
    match color {
        PlayerColor::Red => Some([
            Color::rgb(164, 0, 0),
            Color::rgb(124, 0, 0),
            Color::rgb(92, 4, 0),
            Color::rgb(68, 4, 0),
        ]),
        PlayerColor::Blue => Some([
            Color::rgb(12, 72, 204),
            Color::rgb(4, 40, 160),
            Color::rgb(0, 20, 116),
            Color::rgb(0, 4, 76),
        ]),
        PlayerColor::Green => Some([
            Color::rgb(44, 180, 148),
            Color::rgb(20, 132, 92),
            Color::rgb(4, 84, 44),
            Color::rgb(0, 40, 12),
        ]),
        PlayerColor::Violet => Some([
            Color::rgb(152, 72, 176),
            Color::rgb(116, 44, 132),
            Color::rgb(80, 24, 88),
            Color::rgb(44, 8, 44),
        ]),
        PlayerColor::Orange => Some([
            Color::rgb(248, 140, 20),
            Color::rgb(200, 96, 16),
            Color::rgb(152, 60, 16),
            Color::rgb(108, 32, 12),
        ]),
        PlayerColor::Black => Some([
            Color::rgb(40, 40, 60),
            Color::rgb(28, 28, 44),
            Color::rgb(16, 16, 24),
            Color::rgb(4, 4, 8),
        ]),
        PlayerColor::White => Some([
            Color::rgb(224, 224, 224),
            Color::rgb(152, 152, 180),
            Color::rgb(84, 84, 128),
            Color::rgb(36, 40, 76),
        ]),
        PlayerColor::Yellow => Some([
            Color::rgb(252, 252, 72),
            Color::rgb(228, 204, 32),
            Color::rgb(204, 160, 4),
            Color::rgb(180, 116, 0),
        ]),
        PlayerColor::Neutral => None,
    }
}
