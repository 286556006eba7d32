//! Custom error types for the abif-reader crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AbifError {
    /// The buffer ends before a required header, directory or payload region.
    #[error("Truncated file: {context} needs {needed} bytes, but only {available} are available")]
    Truncated {
        context: &'static str,
        needed: usize,
        available: usize,
    },

    /// The 4-byte magic marker is not `ABIF`, so this is not an ABIF file at all.
    #[error("Invalid magic marker: expected \"ABIF\", got {found:?}")]
    InvalidMagic { found: [u8; 4] },

    /// A directory entry declares an element-type code outside the recognized set.
    /// Fatal to the whole parse: every entry is assumed decodable.
    #[error("Unsupported element type code: {0}")]
    UnsupportedType(i16),
}

/// A convenience `Result` type alias using the crate's `AbifError` type.
pub type Result<T> = std::result::Result<T, AbifError>;
