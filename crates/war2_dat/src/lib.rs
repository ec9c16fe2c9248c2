//! This library handles reading the **WAR** data archives used by *Warcraft II*.
//!
//! # WAR Archive Format Documentation
//!
//! This crate provides utilities to read and extract data from the **WAR** archive format used by
//! the game *Warcraft II*. The WAR format is a custom binary format that stores all game assets
//! (palettes, tile graphics, sprite sheets, sounds) within a single file. WAR files are typically
//! identified with the `.war` extension, the best known being `MAINDAT.WAR`.
//!
//! ## File Structure
//!
//! A WAR file consists of a fixed size header, followed by the entry directory, followed by the
//! entry data.
//!
//! | Offset (bytes) | Field                  | Description                                                |
//! |----------------|------------------------|------------------------------------------------------------|
//! | 0x0000         | Magic number           | 4 bytes: Fixed value 0x00000019                            |
//! | 0x0004         | Entry Count            | 2 bytes: Number of entries in the archive                  |
//! | 0x0006         | Format Id              | 2 bytes: Identifies the game release                       |
//!
//! ### Header
//!
//! The WAR header consists of the following fields:
//!
//! - **Magic Number**: A 4-byte identifier set to `0x00000019`. This helps identify the file type.
//! - **Entry Count**: A 2-byte unsigned integer indicating the number of entries in the archive.
//! - **Format Id**: A 2-byte unsigned integer identifying which release of the game produced the
//!   archive. The value is carried through as-is and is not interpreted by this crate.
//!
//! ### Entry Directory
//!
//! The directory immediately follows the header and holds one record per entry. Entries have no
//! names, they are addressed by their position in the directory. Each record has the following
//! structure:
//!
//! | Offset (bytes) | Field                  | Description                                             |
//! |----------------|------------------------|---------------------------------------------------------|
//! | 0x0000         | Data Offset            | 4 bytes: Offset to the entry data from start of file    |
//! | 0x0004         | Data Length            | 4 bytes: Length of the entry data in bytes              |
//!
//! Every record must describe a byte range that lies wholly inside the file. The directory is
//! validated when the archive is opened and a file with an out of range record is rejected.
//!
//! ### Entry Data
//!
//! Entry data is stored as opaque bytes. What an entry means is a convention between the game
//! executable and the archive: entry 2 of `MAINDAT.WAR` is the forest palette, entry 3 the forest
//! tile graphics, and so on. Decoding the graphics entries is the business of the `war2_gfx`
//! crate, this crate only hands out bytes.
//!
//! ### Palette Entries
//!
//! The one decoded form this crate does provide is the color palette, since every graphics entry
//! is indexed into one. A palette entry is exactly 768 bytes: 256 RGB triplets of 6-bit VGA DAC
//! values, stored red, green, blue. Decoding scales each channel to the full 8-bit range and
//! fixes alpha at `0xFF`.
//!
//! ## Additional Information
//!
//! - **File Extension**: `.war`
//! - **Endianness**: Little-endian for all multi-byte integers
//! - **Names**: Entries carry no names and are addressed by index
//!

pub mod error;
pub mod palette;
pub mod read;
pub mod types;

pub use palette::{Color, Palette};
pub use read::WarArchive;
