//! Tab-delimited gene table reading and writing.
//!
//! The on-disk format is UTF-8 text split on tab characters: a header line
//! of verbatim column names followed by one line per row. Cells are raw
//! text; empty fields stay empty strings in both directions.

mod read;
mod write;

pub use read::TableReader;
pub use write::TableWriter;
