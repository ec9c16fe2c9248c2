//! Base types for structure of sprite sheet entries.

use binrw::{BinRead, BinWrite};

/// Sprite sheet header
///
/// Defines the header of a sprite sheet entry: the number of frames and the
/// size of the box every frame is placed in.
/// All data is stored in little endian format
#[derive(BinRead, BinWrite, Debug, Default, Copy, Clone, PartialEq, Eq)]
#[brw(little)]
pub struct SheetHeader {
    /// The number of frames stored in the sheet
    pub frames: u16,

    /// Width of the widest frame, in pixels
    pub max_width: u16,

    /// Height of the tallest frame, in pixels
    pub max_height: u16,
}

impl SheetHeader {
    /// Size of the header on disk, in bytes
    pub const SIZE: usize = 6;
}

/// Sprite sheet frame record
///
/// Locates the pixel data of one frame inside the sheet entry. The `x` and
/// `y` fields place the frame inside the box described by the sheet header,
/// they do not affect how the frame itself is decoded.
#[derive(BinRead, BinWrite, Debug, Default, Copy, Clone, PartialEq, Eq)]
#[brw(little)]
pub struct FrameEntry {
    /// Horizontal placement of the frame inside the sheet's box
    pub x: u8,

    /// Vertical placement of the frame inside the sheet's box
    pub y: u8,

    /// Width of the frame, in pixels
    pub width: u8,

    /// Height of the frame, in pixels
    pub height: u8,

    /// Offset of the frame's pixel data from the start of the entry
    pub offset: u32,
}

impl FrameEntry {
    /// Size of a frame record on disk, in bytes
    pub const SIZE: usize = 8;
}
