//! Types for reading WAR archives
//!

use binrw::BinRead;
use memmap2::{Mmap, MmapOptions};
use std::{
    fmt::{self, Debug},
    fs::File,
    io::Cursor,
    path::Path,
};
use tracing::{debug, trace};

use crate::{
    error::{Error, Result},
    palette::Palette,
    types::{WarEntry, WarHeader},
};

/// Raw archive bytes, memory mapped when the platform allows it
enum Backing {
    Map(Mmap),
    Bytes(Vec<u8>),
}

impl Backing {
    fn bytes(&self) -> &[u8] {
        match self {
            Backing::Map(map) => map,
            Backing::Bytes(bytes) => bytes,
        }
    }
}

/// WAR archive reader
///
/// The whole entry directory is read and validated up front, so every
/// index below [`WarArchive::len`] can be extracted without further
/// structural checks. Dropping the archive releases the underlying file.
///
/// ```no_run
/// fn list_war_contents(path: &std::path::Path) -> war2_dat::error::Result<()> {
///     let war = war2_dat::WarArchive::open(path, 0)?;
///
///     for i in 0..war.len() {
///         let data = war.entry(i)?;
///         println!("entry {i}: {} bytes", data.len());
///     }
///
///     Ok(())
/// }
/// ```
pub struct WarArchive {
    backing: Backing,
    header: WarHeader,
    entries: Vec<WarEntry>,
    verbosity: u8,
}

impl Debug for WarArchive {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "WarArchive({:#?})", self.header)
    }
}

impl WarArchive {
    /// Open a WAR archive from a file, collecting the entries it contains.
    ///
    /// The file is memory mapped read only and stays mapped for the life of
    /// the archive; a file that cannot be opened or mapped fails with
    /// [`Error::IOError`]. `verbosity` controls logging: level 0 is silent,
    /// level 1 logs one line per archive operation, level 2 adds per entry
    /// detail.
    pub fn open(path: impl AsRef<Path>, verbosity: u8) -> Result<WarArchive> {
        let file = File::open(path.as_ref())?;
        let map = unsafe { MmapOptions::new().map(&file) }?;

        Self::parse(Backing::Map(map), verbosity)
    }

    /// Read a WAR archive already held in memory.
    pub fn from_bytes(bytes: Vec<u8>, verbosity: u8) -> Result<WarArchive> {
        Self::parse(Backing::Bytes(bytes), verbosity)
    }

    fn parse(backing: Backing, verbosity: u8) -> Result<WarArchive> {
        let data = backing.bytes();
        let mut cursor = Cursor::new(data);

        let header = WarHeader::read(&mut cursor)?;
        if header.magic != WarHeader::MAGIC {
            return Err(Error::InvalidMagic(header.magic));
        }

        let count = usize::from(header.entry_count);
        let table_end = WarHeader::SIZE + count * WarEntry::SIZE;
        if data.len() < table_end {
            return Err(Error::CorruptEntryTable(format!(
                "directory of {count} entries needs {table_end} bytes, file has {}",
                data.len()
            )));
        }

        let mut entries = Vec::with_capacity(count);
        for _ in 0..count {
            entries.push(WarEntry::read(&mut cursor)?);
        }

        for (index, entry) in entries.iter().enumerate() {
            let end = u64::from(entry.offset) + u64::from(entry.length);
            if end > data.len() as u64 {
                return Err(Error::CorruptEntryTable(format!(
                    "entry {index} ends at {end}, past the end of the file at {}",
                    data.len()
                )));
            }
        }

        if verbosity >= 1 {
            debug!(
                entries = count,
                format_id = header.format_id,
                "opened war archive"
            );
        }
        if verbosity >= 2 {
            for (index, entry) in entries.iter().enumerate() {
                trace!(index, offset = entry.offset, length = entry.length, "entry");
            }
        }

        Ok(WarArchive {
            backing,
            header,
            entries,
            verbosity,
        })
    }

    /// Number of entries contained in this archive.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether this archive contains no entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the container tag found in the header.
    pub fn magic(&self) -> u32 {
        self.header.magic
    }

    /// Returns the id of the game release that produced the archive.
    pub fn format_id(&self) -> u16 {
        self.header.format_id
    }

    /// Returns the current verbosity level.
    pub fn verbosity(&self) -> u8 {
        self.verbosity
    }

    /// Change how chatty the archive is about the entries it touches.
    pub fn set_verbosity(&mut self, verbosity: u8) {
        self.verbosity = verbosity;
    }

    /// Extract the data of the entry at `index` as an owned copy.
    pub fn entry(&self, index: usize) -> Result<Vec<u8>> {
        let Some(entry) = self.entries.get(index) else {
            return Err(Error::IndexOutOfRange {
                index,
                count: self.entries.len(),
            });
        };

        if self.verbosity >= 2 {
            debug!(
                index,
                offset = entry.offset,
                length = entry.length,
                "extracting entry"
            );
        }

        // Entry ranges were checked against the file size when the
        // directory was read.
        let start = entry.offset as usize;
        let end = start + entry.length as usize;
        Ok(self.backing.bytes()[start..end].to_vec())
    }

    /// Extract the entry at `index` and decode it as a [`Palette`].
    pub fn palette(&self, index: usize) -> Result<Palette> {
        let raw = self.entry(index)?;
        Palette::from_raw(&raw)
    }
}
