//! ABIF header parsing

use byteorder::{BigEndian, ByteOrder};
use log::debug;
use super::models::Header;
use super::utils;
use super::error::Result;

/// Total size of the fixed header prologue.
pub const HEADER_LEN: usize = 34;

/// Parse the fixed 34-byte ABIF header.
///
/// Layout (all integers big-endian):
/// - Bytes 0-3:   Magic marker ("ABIF")
/// - Bytes 4-5:   Format version
/// - Bytes 6-33:  Root directory descriptor: name, tag number,
///                element type, element size, element count,
///                data size (skipped), data offset, data handle
///
/// Does not validate the magic marker; `parse` rejects a bad marker
/// before walking the directory.
pub fn read(buffer: &[u8]) -> Result<Header> {
    let raw = utils::slice(buffer, 0, HEADER_LEN, "header")?;

    let mut magic = [0u8; 4];
    magic.copy_from_slice(&raw[0..4]);

    let header = Header {
        magic,
        version: BigEndian::read_i16(&raw[4..6]),
        name: utils::tag_name(&raw[6..10]),
        tag_number: BigEndian::read_i32(&raw[10..14]),
        element_type: BigEndian::read_i16(&raw[14..16]),
        element_size: BigEndian::read_i16(&raw[16..18]),
        num_elements: BigEndian::read_i32(&raw[18..22]),
        // Bytes 22-25 hold the descriptor's data size, unused here
        data_offset: BigEndian::read_i32(&raw[26..30]),
        data_handle: BigEndian::read_i32(&raw[30..34]),
    };

    debug!(
        "Header parsed: version={}, {} directory entries of {} bytes at offset {}",
        header.version, header.num_elements, header.element_size, header.data_offset
    );

    Ok(header)
}
