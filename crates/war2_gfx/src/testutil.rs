//! Helpers shared by the unit tests.

use std::io::Cursor;

use binrw::BinWrite;
use war2_dat::types::{WarEntry, WarHeader};
use war2_dat::WarArchive;

/// Build an in-memory archive holding `payloads` in entry order.
pub(crate) fn build_archive(payloads: &[&[u8]]) -> WarArchive {
    let header = WarHeader {
        entry_count: payloads.len() as u16,
        format_id: 24,
        ..Default::default()
    };

    let mut cursor = Cursor::new(Vec::new());
    header.write(&mut cursor).unwrap();

    let mut offset = (WarHeader::SIZE + payloads.len() * WarEntry::SIZE) as u32;
    for payload in payloads {
        let entry = WarEntry {
            offset,
            length: payload.len() as u32,
        };
        entry.write(&mut cursor).unwrap();
        offset += payload.len() as u32;
    }

    let mut data = cursor.into_inner();
    for payload in payloads {
        data.extend_from_slice(payload);
    }

    WarArchive::from_bytes(data, 0).unwrap()
}
