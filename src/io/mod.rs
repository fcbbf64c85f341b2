//! File input and output for gene tables and annotation sources.

pub mod gff;
pub mod tsv;
