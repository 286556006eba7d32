//! Directory table walking (entry records and payload location)

use byteorder::{BigEndian, ByteOrder};
use log::trace;
use super::models::{DirectoryEntry, Header};
use super::utils;
use super::error::{AbifError, Result};

/// Minimum bytes a directory record needs for all its fixed fields.
const ENTRY_FIELDS_LEN: usize = 24;

/// Byte offset within a record of the data-offset-or-inline-data field.
const DATA_FIELD_OFFSET: usize = 20;

/// Walk the directory table and slice out each entry's raw payload.
///
/// Entry `i` starts at `header.data_offset + i * header.element_size` and
/// spans `header.element_size` bytes; the record width comes from the
/// header (28 bytes in practice), never from a constant.
///
/// Record layout (integers big-endian):
/// - Bytes 0-3:   Tag name
/// - Bytes 4-7:   Tag number
/// - Bytes 8-9:   Element type (forced to 1 for "PCON", whose stored
///                type is unreliable)
/// - Bytes 10-11: Element size
/// - Bytes 12-15: Element count
/// - Bytes 16-19: Data size
/// - Bytes 20-23: Data offset, or the payload itself when data size <= 4
///
/// Small payloads are packed into the offset field instead of referenced
/// through it: when the declared data size fits in the field's own 4
/// bytes, the payload starts at byte 20 of the record. Otherwise bytes
/// 20-23 hold an absolute offset into the buffer. Either way the payload
/// slice is `num_elements * element_size` bytes long; the redundant
/// data-size field never sizes it.
pub fn read<'a>(buffer: &'a [u8], header: &Header) -> Result<Vec<(DirectoryEntry, &'a [u8])>> {
    let record_width = header.element_size as usize;
    let table_start = header.data_offset as usize;
    let num_entries = header.num_elements.max(0) as usize;

    let mut entries = Vec::with_capacity(num_entries);

    for i in 0..num_entries {
        let entry_start = i
            .checked_mul(record_width)
            .and_then(|off| off.checked_add(table_start))
            .ok_or(AbifError::Truncated {
                context: "directory table",
                needed: usize::MAX,
                available: buffer.len(),
            })?;
        let record = utils::slice(buffer, entry_start, record_width, "directory entry")?;
        if record.len() < ENTRY_FIELDS_LEN {
            return Err(AbifError::Truncated {
                context: "directory entry",
                needed: ENTRY_FIELDS_LEN,
                available: record.len(),
            });
        }

        let name = utils::tag_name(&record[0..4]);
        let tag_number = BigEndian::read_i32(&record[4..8]);
        // Known format quirk: PCON's declared type is unreliable
        let element_type = if name == "PCON" {
            1
        } else {
            BigEndian::read_i16(&record[8..10])
        };
        let element_size = BigEndian::read_i16(&record[10..12]);
        let num_elements = BigEndian::read_i32(&record[12..16]);
        let data_size = BigEndian::read_i32(&record[16..20]);

        let data_offset = if data_size <= 4 {
            // Inline: the offset field holds the payload bytes themselves
            (entry_start + DATA_FIELD_OFFSET) as i32
        } else {
            BigEndian::read_i32(&record[DATA_FIELD_OFFSET..DATA_FIELD_OFFSET + 4])
        };

        let payload_len = (num_elements as i64 * element_size as i64).max(0) as usize;
        let payload = utils::slice(buffer, data_offset as usize, payload_len, "tag payload")?;

        let entry = DirectoryEntry {
            name,
            tag_number,
            element_type,
            element_size,
            num_elements,
            data_size,
            data_offset,
        };
        trace!(
            "Directory entry {}: {} type={} count={} size={} offset={}",
            i, entry.key(), entry.element_type, entry.num_elements, entry.data_size, entry.data_offset
        );
        entries.push((entry, payload));
    }

    Ok(entries)
}
