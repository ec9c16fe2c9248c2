//! Error types that can be emitted from this library

use miette::Diagnostic;
use thiserror::Error;

use crate::tileset::Era;
use crate::units::{PlayerColor, Race};

/// Error type for library
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    /// Transparent wrapper for [`war2_dat::error::Error`]
    #[error(transparent)]
    Archive(#[from] war2_dat::error::Error),

    /// the archive does not carry a tileset for the era
    #[error("archive does not carry a tileset for the {0} era")]
    UnsupportedEra(Era),

    /// the archive does not carry unit sprites for the race
    #[error("archive does not carry unit sprites for the {0} race")]
    UnsupportedRace(Race),

    /// the player color has no palette ramp
    #[error("no palette ramp for the {0} player color")]
    UnsupportedPlayerColor(PlayerColor),

    /// a pixel referenced a color past the end of the palette
    #[error("pixel references palette index {index} past the end of the palette")]
    PaletteIndexOutOfRange {
        /// the palette index the pixel asked for
        index: usize,
    },

    /// a graphics entry does not decode
    #[error("malformed graphics entry: {0}")]
    MalformedGraphic(String),
}

/// Generic result type with crate's Error as its error variant
pub type Result<T> = core::result::Result<T, Error>;
