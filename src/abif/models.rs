//! Data structures representing ABIF format components

use std::collections::HashMap;
use super::error::{AbifError, Result};

/// The 4-byte magic marker every ABIF file starts with.
pub const MAGIC: [u8; 4] = *b"ABIF";

/// Parsed ABIF file header (the fixed 34-byte prologue).
///
/// Besides the magic marker and format version, the header is itself a
/// directory entry describing the directory table: its element size is the
/// fixed record width of one directory entry, its element count is the
/// number of entries, and its data offset is where the table starts.
#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    pub magic: [u8; 4],
    pub version: i16,
    pub name: String,
    pub tag_number: i32,
    pub element_type: i16,
    /// Record width in bytes of one directory entry (28 in practice, but
    /// always taken from the file, never hardcoded).
    pub element_size: i16,
    /// Number of directory entries.
    pub num_elements: i32,
    /// Absolute offset of the first directory entry.
    pub data_offset: i32,
    pub data_handle: i32,
}

/// One self-describing directory record: a tag name, its payload type,
/// element count, and where the payload bytes live.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryEntry {
    /// 4-byte ASCII tag name (e.g. "PBAS", "DATA").
    pub name: String,
    pub tag_number: i32,
    /// Raw element-type code. For the "PCON" tag this is forced to 1
    /// regardless of the stored value (the declared type is unreliable
    /// for that tag).
    pub element_type: i16,
    /// Bytes per payload element.
    pub element_size: i16,
    /// Number of payload elements.
    pub num_elements: i32,
    /// Declared payload size in bytes. Redundant (should equal
    /// `num_elements * element_size`) and never used to size the payload
    /// slice; kept for fidelity and debugging.
    pub data_size: i32,
    /// Effective absolute payload offset. For inline entries (data size
    /// <= 4) this points at byte 20 of the entry record itself.
    pub data_offset: i32,
}

impl DirectoryEntry {
    /// Composite key identifying this tag instance: `name + "_" + tag_number`
    /// (e.g. `"PBAS_1"`). This is the format's de facto unique identifier;
    /// if two entries collide, the later one wins in the output map.
    pub fn key(&self) -> String {
        format!("{}_{}", self.name, self.tag_number)
    }
}

/// Element-type codes recognized by the payload decoder.
///
/// Codes 1024 and above are reserved for vendor-specific data and decode
/// as opaque bytes; any other code outside this set fails the parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementType {
    /// 1: unsigned 8-bit integers
    UInt8,
    /// 2: the whole payload is text
    Text,
    /// 3: unsigned 16-bit integers, big-endian
    UInt16,
    /// 4: signed 16-bit integers, big-endian
    Int16,
    /// 5: signed 32-bit integers, big-endian
    Int32,
    /// 7: 32-bit floats, little-endian
    Float32,
    /// 8: 64-bit floats, little-endian
    Float64,
    /// 10: {year, month, day} packed in 4 bytes
    Date,
    /// 11: {hour, minute, second, hundredths} packed in 4 bytes
    Time,
    /// 18: length-prefixed string (prefix byte discarded)
    PString,
    /// 19: terminator-suffixed string (final byte discarded)
    CString,
    /// >= 1024: vendor-specific, decoded as raw bytes
    User(i16),
}

impl TryFrom<i16> for ElementType {
    type Error = AbifError;
    fn try_from(code: i16) -> Result<Self> {
        match code {
            1 => Ok(Self::UInt8),
            2 => Ok(Self::Text),
            3 => Ok(Self::UInt16),
            4 => Ok(Self::Int16),
            5 => Ok(Self::Int32),
            7 => Ok(Self::Float32),
            8 => Ok(Self::Float64),
            10 => Ok(Self::Date),
            11 => Ok(Self::Time),
            18 => Ok(Self::PString),
            19 => Ok(Self::CString),
            c if c >= 1024 => Ok(Self::User(c)),
            c => Err(AbifError::UnsupportedType(c)),
        }
    }
}

/// A calendar date as stored in a type-10 payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Date {
    pub year: i16,
    pub month: u8,
    pub day: u8,
}

/// A time of day as stored in a type-11 payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Time {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    /// Hundredths of a second.
    pub hsecond: u8,
}

/// A decoded tag payload.
///
/// Numeric payloads with exactly one element decode to the bare scalar
/// variant rather than a one-element array; multi-element payloads decode
/// to the array variant. This singular/plural duality is part of the
/// format's observed behavior and applies uniformly to all numeric types.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedValue {
    UInt8(u8),
    UInt8Array(Vec<u8>),
    UInt16(u16),
    UInt16Array(Vec<u16>),
    Int16(i16),
    Int16Array(Vec<i16>),
    Int32(i32),
    Int32Array(Vec<i32>),
    Float32(f32),
    Float32Array(Vec<f32>),
    Float64(f64),
    Float64Array(Vec<f64>),
    Text(String),
    Date(Date),
    Time(Time),
    /// Vendor-specific payload, exposed untyped.
    Raw(Vec<u8>),
}

/// The complete result of parsing one ABIF buffer.
///
/// Fully owned by the caller: every decoded value is a copy, nothing
/// borrows from the input buffer.
#[derive(Debug, PartialEq)]
pub struct ParseResult {
    pub header: Header,
    /// All directory entries in file order (metadata only, no payloads).
    pub directory: Vec<DirectoryEntry>,
    /// Decoded payloads keyed by composite key (`name + "_" + tag_number`).
    /// On a key collision the later entry overwrites the earlier one.
    pub data: HashMap<String, DecodedValue>,
}

impl ParseResult {
    /// Look up a decoded value by tag name and tag number.
    pub fn get(&self, name: &str, tag_number: i32) -> Option<&DecodedValue> {
        self.data.get(&format!("{}_{}", name, tag_number))
    }
}
