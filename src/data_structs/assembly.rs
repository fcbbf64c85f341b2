use std::error::Error;
use std::fmt;

use itertools::Itertools;

use super::GeneTable;

/// Returns the gene ID column name for an assembly version.
pub fn id_column(assembly: &str) -> String {
    format!("{} ID", assembly)
}

/// Returns the functional description column name for an assembly version.
pub fn description_column(assembly: &str) -> String {
    format!("{} Description", assembly)
}

/// One or more required columns absent from a table.
///
/// Enumerates every missing name, not just the first found, so the input
/// can be fixed in one pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingColumns {
    columns: Vec<String>,
}

impl MissingColumns {
    pub fn new(columns: Vec<String>) -> Self {
        Self { columns }
    }

    /// The missing column names, in derivation order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }
}

impl fmt::Display for MissingColumns {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(
            f,
            "missing columns in table: {}",
            self.columns
                .iter()
                .map(|name| format!("{:?}", name))
                .join(", ")
        )
    }
}

impl Error for MissingColumns {}

/// The three coordinate column names of one assembly version.
///
/// Derived by concatenating the version prefix with fixed suffixes, e.g.
/// `"Wm82v2"` yields `"Wm82v2 Chromosome"`, `"Wm82v2 Start Pair"`, and
/// `"Wm82v2 End Pair"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssemblyColumns {
    chromosome: String,
    start:      String,
    end:        String,
}

impl AssemblyColumns {
    pub fn new(assembly: &str) -> Self {
        Self {
            chromosome: format!("{} Chromosome", assembly),
            start:      format!("{} Start Pair", assembly),
            end:        format!("{} End Pair", assembly),
        }
    }

    pub fn chromosome(&self) -> &str {
        &self.chromosome
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn end(&self) -> &str {
        &self.end
    }

    /// Locates the three columns in a table.
    ///
    /// Fails with [`MissingColumns`] naming every absent column.
    pub fn resolve(
        &self,
        table: &GeneTable,
    ) -> Result<ResolvedColumns, MissingColumns> {
        let chromosome = table.column_index(&self.chromosome);
        let start = table.column_index(&self.start);
        let end = table.column_index(&self.end);

        match (chromosome, start, end) {
            (Some(chromosome), Some(start), Some(end)) => {
                Ok(ResolvedColumns {
                    chromosome,
                    start,
                    end,
                })
            },
            _ => {
                let missing = [
                    (chromosome, &self.chromosome),
                    (start, &self.start),
                    (end, &self.end),
                ]
                .into_iter()
                .filter(|(index, _)| index.is_none())
                .map(|(_, name)| name.clone())
                .collect();
                Err(MissingColumns::new(missing))
            },
        }
    }
}

/// Positions of the resolved coordinate columns within a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedColumns {
    pub chromosome: usize,
    pub start:      usize,
    pub end:        usize,
}
