//! This library decodes the tileset and unit graphics stored in the **WAR** data archives used by
//! *Warcraft II*.
//!
//! # Graphics Format Documentation
//!
//! Reading the archives themselves is the business of the `war2_dat` crate. This crate knows
//! which entries of `MAINDAT.WAR` hold graphics, decodes their indexed pixels through the
//! matching palette, and hands the finished images to a caller callback one by one.
//!
//! ## Entry Roles
//!
//! Entries carry no names, the game locates assets by position. The entries this crate touches:
//!
//! | Entry | Asset                                                           |
//! |-------|-----------------------------------------------------------------|
//! | 2     | Forest palette, also the base palette for unit sprites          |
//! | 3     | Forest tiles                                                    |
//! | 10    | Wasteland palette                                               |
//! | 11    | Wasteland tiles                                                 |
//! | 18    | Winter palette                                                  |
//! | 19    | Winter tiles                                                    |
//! | 33    | Human unit sprite sheet                                         |
//! | 34    | Orc unit sprite sheet                                           |
//! | 438   | Swamp palette, expansion archives only                          |
//! | 439   | Swamp tiles, expansion archives only                            |
//!
//! ## Tile Graphics
//!
//! A tile graphics entry is a plain run of tiles with no header. Every tile is 32x32 pixels of
//! one byte palette indices in row major order, 1024 bytes per tile. The number of tiles is the
//! entry length divided by 1024, trailing bytes that do not fill a whole tile are ignored.
//!
//! ## Unit Sprite Sheets
//!
//! A sprite sheet entry starts with a header and a frame table, the frame pixel data follows:
//!
//! | Offset (bytes) | Field                  | Description                                             |
//! |----------------|------------------------|---------------------------------------------------------|
//! | 0x0000         | Frame Count            | 2 bytes: Number of frames in the sheet                  |
//! | 0x0002         | Max Width              | 2 bytes: Width of the widest frame                      |
//! | 0x0004         | Max Height             | 2 bytes: Height of the tallest frame                    |
//! | 0x0006         | Frame Table            | Frame Count * 8 bytes: One record per frame             |
//!
//! Each frame record locates one frame:
//!
//! | Offset (bytes) | Field                  | Description                                             |
//! |----------------|------------------------|---------------------------------------------------------|
//! | 0x0000         | X                      | 1 byte: Horizontal placement inside the sheet's box     |
//! | 0x0001         | Y                      | 1 byte: Vertical placement inside the sheet's box       |
//! | 0x0002         | Width                  | 1 byte: Frame width in pixels                           |
//! | 0x0003         | Height                 | 1 byte: Frame height in pixels                          |
//! | 0x0004         | Data Offset            | 4 bytes: Offset of the pixel data within the entry      |
//!
//! The pixel data of a frame is Width times Height one byte palette indices in row major order
//! at Data Offset.
//!
//! ## Team Colors
//!
//! Unit sprites are stored once and tinted per player. Palette indices 208 through 211 are the
//! team color slots: before decoding, the four slots are overwritten with the claiming player's
//! ramp, brightest first. The substitution happens on a copy of the palette, the archive is
//! never modified.
//!
//! ## Additional Information
//!
//! - **Endianness**: Little-endian for all multi-byte integers
//! - **Pixels**: One byte per pixel, indexed into a 256 color palette
//!

pub mod error;
pub mod layout;
mod pixels;
#[cfg(test)]
mod testutil;
pub mod tileset;
pub mod types;
pub mod units;

pub use tileset::{decode_tileset, Era, TilesetDescriptor};
pub use units::{decode_units, PlayerColor, Race, UnitsDescriptor};
