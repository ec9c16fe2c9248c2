//! Base types for structure of WAR file.

use binrw::{BinRead, BinWrite};

/// WAR file header
///
/// Defines the header of the WAR file, which starts with a magic number
/// identifying the format, followed by the number of entries and an id
/// describing which game release produced the file.
/// All data is stored in little endian format
#[derive(BinRead, BinWrite, Debug, Copy, Clone, PartialEq, Eq)]
#[brw(little)]
pub struct WarHeader {
    /// Magic number identifying a WAR archive
    pub magic: u32,

    /// The number of entries stored in the file
    pub entry_count: u16,

    /// Identifies the game release the archive belongs to
    pub format_id: u16,
}

impl WarHeader {
    /// Magic number of a WAR archive
    pub const MAGIC: u32 = 0x0000_0019;

    /// Size of the header on disk, in bytes
    pub const SIZE: usize = 8;
}

impl Default for WarHeader {
    fn default() -> Self {
        Self {
            magic: Self::MAGIC,
            entry_count: Default::default(),
            format_id: Default::default(),
        }
    }
}

/// WAR file directory entry
///
/// Locates the data of a single entry within the file
#[derive(BinRead, BinWrite, Debug, Default, Copy, Clone, PartialEq, Eq)]
#[brw(little)]
pub struct WarEntry {
    /// The offset to the data for this entry from the start of the file
    pub offset: u32,

    /// The size of the data for this entry, in bytes
    pub length: u32,
}

impl WarEntry {
    /// Size of a directory entry on disk, in bytes
    pub const SIZE: usize = 8;
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use binrw::BinRead;
    use binrw::BinWrite;
    use pretty_assertions::assert_eq;

    use crate::error::Result;
    use crate::types::WarEntry;
    use crate::types::WarHeader;

    #[test]
    fn read_header() -> Result<()> {
        #[rustfmt::skip]
        let mut input = Cursor::new(vec![
            0x19, 0x00, 0x00, 0x00,
            0x02, 0x00,
            0x18, 0x00,
        ]);

        let expected = WarHeader {
            entry_count: 2,
            format_id: 24,
            ..Default::default()
        };

        assert_eq!(WarHeader::read(&mut input)?, expected);

        Ok(())
    }

    #[test]
    fn write_header() -> Result<()> {
        #[rustfmt::skip]
        let expected: Vec<u8> = vec![
            0x19, 0x00, 0x00, 0x00,
            0x02, 0x00,
            0x18, 0x00,
        ];

        let header = WarHeader {
            entry_count: 2,
            format_id: 24,
            ..Default::default()
        };

        let mut actual = Vec::new();
        header.write(&mut Cursor::new(&mut actual))?;

        assert_eq!(actual, expected);

        Ok(())
    }

    #[test]
    fn read_entry() -> Result<()> {
        #[rustfmt::skip]
        let mut input = Cursor::new(vec![
            0x18, 0x00, 0x00, 0x00,
            0x00, 0x04, 0x00, 0x00,
        ]);

        let expected = WarEntry {
            offset: 24,
            length: 1024,
        };

        assert_eq!(WarEntry::read(&mut input)?, expected);

        Ok(())
    }

    #[test]
    fn write_entry() -> Result<()> {
        #[rustfmt::skip]
        let expected: Vec<u8> = vec![
            0x18, 0x00, 0x00, 0x00,
            0x00, 0x04, 0x00, 0x00,
        ];

        let entry = WarEntry {
            offset: 24,
            length: 1024,
        };

        let mut actual = Vec::new();
        entry.write(&mut Cursor::new(&mut actual))?;

        assert_eq!(actual, expected);

        Ok(())
    }
}
