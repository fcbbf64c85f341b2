//! Region overlap queries over a [`GeneTable`].

use std::fmt;

use log::debug;

use crate::data_structs::{AssemblyColumns, GeneTable};
use crate::utils::coerce_numeric;

/// A chromosomal interval to search, in one assembly version's coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionQuery {
    assembly:   String,
    chromosome: i64,
    start:      u64,
    end:        u64,
}

impl RegionQuery {
    /// Creates a query for `[start, end]` on a chromosome of the given
    /// assembly version. `start > end` is accepted and matches no rows.
    pub fn new<S: Into<String>>(
        assembly: S,
        chromosome: i64,
        start: u64,
        end: u64,
    ) -> Self {
        Self {
            assembly: assembly.into(),
            chromosome,
            start,
            end,
        }
    }

    pub fn assembly(&self) -> &str {
        &self.assembly
    }

    pub fn chromosome(&self) -> i64 {
        self.chromosome
    }

    pub fn start(&self) -> u64 {
        self.start
    }

    pub fn end(&self) -> u64 {
        self.end
    }
}

impl fmt::Display for RegionQuery {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(
            f,
            "{} chromosome {}:{}-{}",
            self.assembly, self.chromosome, self.start, self.end
        )
    }
}

/// Returns the subset of rows whose gene interval overlaps the queried
/// interval on the queried chromosome.
///
/// Column names are derived from the query's assembly version; if any of
/// the three coordinate columns is absent the query fails with
/// [`MissingColumns`](crate::data_structs::MissingColumns) naming all of
/// them. Cells are coerced per row with [`coerce_numeric`]; a cell that
/// fails coercion excludes its row from that condition without aborting
/// the query.
///
/// The result preserves source row order and every original column, and
/// the input table is never mutated.
pub fn query_region(
    table: &GeneTable,
    query: &RegionQuery,
) -> anyhow::Result<GeneTable> {
    let columns = AssemblyColumns::new(query.assembly()).resolve(table)?;

    let chromosome = query.chromosome() as f64;
    let start = query.start() as f64;
    let end = query.end() as f64;

    // Closed intervals [gene_start, gene_end] and [start, end] intersect
    // iff neither lies entirely before the other.
    let result = table.filter(|row| {
        coerce_numeric(&row[columns.chromosome]).is_some_and(|c| c == chromosome)
            && coerce_numeric(&row[columns.start]).is_some_and(|s| s <= end)
            && coerce_numeric(&row[columns.end]).is_some_and(|e| e >= start)
    });

    debug!(
        "query {} matched {} of {} rows",
        query,
        result.len(),
        table.len()
    );
    Ok(result)
}
