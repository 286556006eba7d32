//! # abif-reader
//!
//! A reader for ABIF files — the tagged binary container produced by
//! Applied Biosystems sequencing instruments (.ab1/.fsa) for chromatogram
//! traces and run metadata.
//!
//! The decoder consumes an in-memory byte buffer and returns every tag in
//! the file as a strongly-typed value; it is agnostic to tag meaning and
//! decodes purely by each tag's declared element type. Read-only: there is
//! no encode path.
pub mod abif;

// Re-export the main types for convenience
pub use abif::{
    parse,
    AbifError,
    models::{
        Header,
        DirectoryEntry,
        ElementType,
        DecodedValue,
        Date,
        Time,
        ParseResult,
    },
};
