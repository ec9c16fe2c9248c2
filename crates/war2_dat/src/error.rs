//! Error types that can be emitted from this library

use miette::Diagnostic;
use thiserror::Error;

/// Error type for library
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    /// Transparent wrapper for [`std::io::Error`]
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    /// Transparent wrapper for [`binrw::Error`]
    #[error(transparent)]
    BinRWError(#[from] binrw::Error),

    /// file is not a war archive
    #[error("file is not a war archive (magic {0:#010x})")]
    InvalidMagic(u32),

    /// the entry directory is inconsistent with the file
    #[error("corrupt entry table: {0}")]
    CorruptEntryTable(String),

    /// requested entry index does not exist
    #[error("entry index {index} out of range for archive with {count} entries")]
    IndexOutOfRange {
        /// the requested index
        index: usize,
        /// the number of entries in the archive
        count: usize,
    },

    /// entry is not a palette
    #[error("palette entry must be 768 bytes, found {len}")]
    MalformedPalette {
        /// the length of the entry in bytes
        len: usize,
    },
}

/// Generic result type with crate's Error as its error variant
pub type Result<T> = core::result::Result<T, Error>;
