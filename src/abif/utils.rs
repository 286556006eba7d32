//! Low-level byte slicing utilities

use super::error::{AbifError, Result};

/// Take `len` bytes starting at `offset`, or fail with `Truncated`.
///
/// All region reads in the format go through this so that a short buffer
/// surfaces as a typed error instead of an out-of-bounds panic.
pub fn slice<'a>(buffer: &'a [u8], offset: usize, len: usize, context: &'static str) -> Result<&'a [u8]> {
    let end = offset.checked_add(len).ok_or(AbifError::Truncated {
        context,
        needed: usize::MAX,
        available: buffer.len(),
    })?;
    buffer.get(offset..end).ok_or(AbifError::Truncated {
        context,
        needed: end,
        available: buffer.len(),
    })
}

/// Decode a 4-byte ASCII tag name, replacing any non-UTF-8 bytes.
pub fn tag_name(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
