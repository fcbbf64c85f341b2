//! Higher-level table curation tools.

pub mod extend;
