//! Core ABIF parsing module

pub mod models;
pub mod error;
mod header;
mod directory;
mod decoder;
mod utils;

use std::collections::HashMap;
use log::info;
use models::{ParseResult, MAGIC};
pub use error::{AbifError, Result};

/// Parse a complete ABIF buffer into header, directory and decoded data.
///
/// The buffer is only borrowed for the duration of the call and never
/// mutated; the returned [`ParseResult`] owns all of its contents. The
/// parse is a pure single pass, so independent calls on separate buffers
/// may run concurrently without coordination.
///
/// # Errors
/// Returns an error if:
/// - The buffer is shorter than the header, the directory table, or any
///   referenced payload region
/// - The magic marker is not "ABIF"
/// - A directory entry declares an unrecognized element-type code
///
/// Any error aborts the whole parse; there is no partial-result mode.
pub fn parse(buffer: &[u8]) -> Result<ParseResult> {
    let header = header::read(buffer)?;
    if header.magic != MAGIC {
        return Err(AbifError::InvalidMagic { found: header.magic });
    }

    let raw_entries = directory::read(buffer, &header)?;

    let mut directory = Vec::with_capacity(raw_entries.len());
    let mut data = HashMap::with_capacity(raw_entries.len());
    for (entry, payload) in raw_entries {
        let value = decoder::decode(entry.element_type, payload)?;
        // Composite keys are unique in well-formed files; on a collision
        // the later entry wins
        data.insert(entry.key(), value);
        directory.push(entry);
    }

    info!(
        "ABIF buffer parsed: version {}, {} directory entries, {} tags",
        header.version,
        directory.len(),
        data.len()
    );

    Ok(ParseResult { header, directory, data })
}
