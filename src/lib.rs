//! # genebrowse
//!
//! `genebrowse` is a Rust library and command-line tool for browsing gene
//! loci across reference genome assembly versions. It operates on
//! tab-separated gene coordinate tables (the "Gold Standard List" of a
//! curation project) that carry, per assembly version `V`, the columns
//! `"{V} Chromosome"`, `"{V} Start Pair"`, and `"{V} End Pair"` alongside
//! arbitrary metadata columns such as gene IDs and descriptions.
//!
//! ## Key features
//!
//! * **Region queries**: retrieve every gene whose interval overlaps a
//!   queried chromosomal span in a chosen assembly version
//!   ([`query_region`](query::query_region)). Overlap uses inclusive
//!   interval intersection; cells that fail numeric coercion never match
//!   and never abort a query.
//! * **Table extension**: append a new assembly version's IDs, coordinates,
//!   and functional descriptions to an existing table by joining a
//!   locus/transcript name map, GFF3 gene models, and an annotation info
//!   file ([`TableExtender`](tools::extend::TableExtender)).
//! * **Faithful I/O**: tables are loaded and written as raw text cells with
//!   column order and row order preserved exactly
//!   ([`TableReader`](io::tsv::TableReader),
//!   [`TableWriter`](io::tsv::TableWriter)).
//!
//! ## Structure
//!
//! * [`data_structs`]: the in-memory gene table and assembly-version column
//!   resolution.
//! * [`io`]: tab-delimited table and GFF3 reading/writing.
//! * [`query`]: the region overlap query engine.
//! * [`tools`]: higher-level table curation tools (extension joins).
//! * [`utils`]: shared helpers such as fallible numeric coercion.
//!
//! ## Usage
//!
//! ```no_run
//! use genebrowse::prelude::*;
//!
//! fn main() -> anyhow::Result<()> {
//!     let table = TableReader::from_path("genes.tsv".as_ref())?.finish()?;
//!     let query = RegionQuery::new("Wm82v2", 5, 150, 300);
//!     let hits = query_region(&table, &query)?;
//!     println!("{} genes overlap {}", hits.len(), query);
//!     Ok(())
//! }
//! ```

pub mod data_structs;
pub mod io;
pub mod prelude;
pub mod query;
pub mod tools;
pub mod utils;
