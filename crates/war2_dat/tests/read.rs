use binrw::BinWrite;
use std::io::{Cursor, Write};
use tempfile::NamedTempFile;
use tracing::info;
use tracing_test::traced_test;
use war2_dat::error::{Error, Result};
use war2_dat::types::{WarEntry, WarHeader};
use war2_dat::{Color, WarArchive};

fn build_archive(format_id: u16, payloads: &[&[u8]]) -> Result<Vec<u8>> {
    let header = WarHeader {
        entry_count: payloads.len() as u16,
        format_id,
        ..Default::default()
    };

    let mut cursor = Cursor::new(Vec::new());
    header.write(&mut cursor)?;

    let mut offset = (WarHeader::SIZE + payloads.len() * WarEntry::SIZE) as u32;
    for payload in payloads {
        let entry = WarEntry {
            offset,
            length: payload.len() as u32,
        };
        entry.write(&mut cursor)?;
        offset += payload.len() as u32;
    }

    let mut data = cursor.into_inner();
    for payload in payloads {
        data.extend_from_slice(payload);
    }
    Ok(data)
}

fn write_archive(format_id: u16, payloads: &[&[u8]]) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(&build_archive(format_id, payloads)?)?;
    Ok(file)
}

#[traced_test]
#[test]
fn open_archive_from_disk() -> Result<()> {
    let file = write_archive(24, &[b"Hello World", &[0u8; 768]])?;

    let archive = WarArchive::open(file.path(), 0)?;
    assert_eq!(archive.len(), 2);
    assert_eq!(archive.magic(), WarHeader::MAGIC);
    assert_eq!(archive.format_id(), 24);

    for i in 0..archive.len() {
        info!("extracting entry {i}");
        let data = archive.entry(i)?;
        assert!(!data.is_empty());
    }

    assert_eq!(archive.entry(0)?, b"Hello World");

    Ok(())
}

#[test]
fn open_missing_file() {
    let err = WarArchive::open("/definitely/not/here.war", 0).unwrap_err();
    assert!(matches!(err, Error::IOError(_)));
}

#[test]
fn open_unmappable_file() -> Result<()> {
    // A zero length file cannot be memory mapped.
    let file = NamedTempFile::new()?;

    let err = WarArchive::open(file.path(), 0).unwrap_err();
    assert!(matches!(err, Error::IOError(_)));

    Ok(())
}

#[test]
fn open_agrees_with_from_bytes() -> Result<()> {
    let bytes = build_archive(24, &[b"Hello World"])?;

    let mut file = NamedTempFile::new()?;
    file.write_all(&bytes)?;

    let from_disk = WarArchive::open(file.path(), 0)?;
    let from_memory = WarArchive::from_bytes(bytes, 0)?;

    assert_eq!(from_disk.len(), from_memory.len());
    assert_eq!(from_disk.format_id(), from_memory.format_id());
    assert_eq!(from_disk.entry(0)?, from_memory.entry(0)?);

    Ok(())
}

#[test]
fn decode_palette_from_disk() -> Result<()> {
    let mut raw = vec![0u8; 768];
    raw[0] = 0x3F;
    raw[1] = 0x20;
    raw[2] = 0x10;

    let file = write_archive(24, &[&raw])?;
    let archive = WarArchive::open(file.path(), 0)?;

    let palette = archive.palette(0)?;
    assert_eq!(palette.color(0), Some(Color::rgb(252, 128, 64)));

    Ok(())
}

#[traced_test]
#[test]
fn silent_at_verbosity_zero() -> Result<()> {
    let archive = WarArchive::from_bytes(build_archive(24, &[b"Hello World"])?, 0)?;
    archive.entry(0)?;

    assert!(!logs_contain("opened war archive"));
    assert!(!logs_contain("extracting entry"));

    Ok(())
}

#[traced_test]
#[test]
fn logs_when_verbosity_raised() -> Result<()> {
    let mut archive = WarArchive::from_bytes(build_archive(24, &[b"Hello World"])?, 1)?;
    assert!(logs_contain("opened war archive"));

    archive.set_verbosity(2);
    archive.entry(0)?;
    assert!(logs_contain("extracting entry"));

    Ok(())
}
