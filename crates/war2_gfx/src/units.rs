//! Decoding of unit sprite sheets.

use std::fmt;
use std::io::Cursor;

use binrw::BinRead;
use tracing::{debug, trace};
use war2_dat::{Color, Palette, WarArchive};

use crate::{
    error::{Error, Result},
    layout,
    pixels::colorize,
    types::{FrameEntry, SheetHeader},
};

/// The sides whose units a sprite sheet draws
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Race {
    /// The human alliance
    Human,
    /// The orcish horde
    Orc,
    /// Critters and other sideless units, which have no sprite sheet
    Neutral,
}

impl fmt::Display for Race {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Race::Human => "human",
            Race::Orc => "orc",
            Race::Neutral => "neutral",
        };
        write!(f, "{name}")
    }
}

/// The colors a player can claim
///
/// `Neutral` is the color of unclaimed map units and has no palette ramp.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PlayerColor {
    Red,
    Blue,
    Green,
    Violet,
    Orange,
    Black,
    White,
    Yellow,
    Neutral,
}

impl fmt::Display for PlayerColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PlayerColor::Red => "red",
            PlayerColor::Blue => "blue",
            PlayerColor::Green => "green",
            PlayerColor::Violet => "violet",
            PlayerColor::Orange => "orange",
            PlayerColor::Black => "black",
            PlayerColor::White => "white",
            PlayerColor::Yellow => "yellow",
            PlayerColor::Neutral => "neutral",
        };
        write!(f, "{name}")
    }
}

/// Context of one unit sheet decode call
///
/// Built before the first callback runs, passed by reference to every
/// callback invocation, and returned when the call finishes.
#[derive(Debug, Clone)]
pub struct UnitsDescriptor {
    /// The race the sheet belongs to
    pub race: Race,
    /// The player color the sprites are tinted with
    pub color: PlayerColor,
    /// The palette the sprites are colored with, after the ramp substitution
    pub palette: Palette,
    /// Number of sprite frames in the sheet
    pub units: usize,
}

/// Decode the unit sprites of a race tinted for a player, handing every
/// frame to `draw`.
///
/// The base palette has the four team color slots overwritten with the
/// player's ramp before any pixel is decoded, the archive itself is not
/// touched. `draw` is called once per frame, in frame table order, with the
/// colored pixels in row major order, the frame width and height in pixels,
/// the descriptor, and the image number counting up from 0. The pixel slice
/// is reused between frames, a callback that keeps pixels around must copy
/// them.
pub fn decode_units<F>(
    archive: &WarArchive,
    color: PlayerColor,
    race: Race,
    mut draw: F,
) -> Result<UnitsDescriptor>
where
    F: FnMut(&[Color], u32, u32, &UnitsDescriptor, usize),
{
    let sheet_entry = match layout::race_sheet_entry(race) {
        Some(entry) if entry < archive.len() => entry,
        _ => return Err(Error::UnsupportedRace(race)),
    };
    let Some(ramp) = layout::player_ramp(color) else {
        return Err(Error::UnsupportedPlayerColor(color));
    };

    let mut palette = archive.palette(layout::UNIT_PALETTE_ENTRY)?;
    palette.colors_mut()[layout::RAMP_START..layout::RAMP_START + layout::RAMP_LEN]
        .copy_from_slice(&ramp);

    let sheet = archive.entry(sheet_entry)?;
    if sheet.len() < SheetHeader::SIZE {
        return Err(Error::MalformedGraphic(format!(
            "sheet header needs {} bytes, entry has {}",
            SheetHeader::SIZE,
            sheet.len()
        )));
    }

    let mut cursor = Cursor::new(sheet.as_slice());
    let header = SheetHeader::read(&mut cursor)
        .map_err(|e| Error::MalformedGraphic(format!("sheet header: {e}")))?;

    let frames = usize::from(header.frames);
    let table_end = SheetHeader::SIZE + frames * FrameEntry::SIZE;
    if sheet.len() < table_end {
        return Err(Error::MalformedGraphic(format!(
            "frame table of {frames} frames needs {table_end} bytes, entry has {}",
            sheet.len()
        )));
    }

    let mut table = Vec::with_capacity(frames);
    for _ in 0..frames {
        let entry = FrameEntry::read(&mut cursor)
            .map_err(|e| Error::MalformedGraphic(format!("frame table: {e}")))?;
        table.push(entry);
    }

    let descriptor = UnitsDescriptor {
        race,
        color,
        palette,
        units: frames,
    };

    if archive.verbosity() >= 1 {
        debug!(
            race = %race,
            color = %color,
            frames = descriptor.units,
            "decoding unit sprites"
        );
    }

    let mut pixels = Vec::new();
    for (number, frame) in table.iter().enumerate() {
        if archive.verbosity() >= 2 {
            trace!(
                number,
                width = frame.width,
                height = frame.height,
                "frame"
            );
        }

        let start = u64::from(frame.offset);
        let end = start + u64::from(frame.width) * u64::from(frame.height);
        if end > sheet.len() as u64 {
            return Err(Error::MalformedGraphic(format!(
                "frame {number} spans {start}..{end}, entry has {} bytes",
                sheet.len()
            )));
        }
        let data = &sheet[start as usize..end as usize];

        colorize(&descriptor.palette, data, &mut pixels)?;
        draw(
            &pixels,
            u32::from(frame.width),
            u32::from(frame.height),
            &descriptor,
            number,
        );
    }

    Ok(descriptor)
}
