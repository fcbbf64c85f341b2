use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::Context;
use log::debug;

use crate::data_structs::GeneTable;

/// Reads a tab-delimited gene table from a source.
pub struct TableReader<R: Read> {
    inner: csv::Reader<R>,
}

impl TableReader<File> {
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open table {}", path.display()))?;
        Ok(Self::new(file))
    }
}

impl<R: Read> TableReader<R> {
    pub fn new(reader: R) -> Self {
        let inner = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .from_reader(reader);
        Self { inner }
    }

    /// Consumes the source and returns the fully parsed table.
    ///
    /// The header line is taken verbatim; no trimming is applied to column
    /// names or cells. Ragged data rows are a parse error.
    pub fn finish(mut self) -> anyhow::Result<GeneTable> {
        let columns = self
            .inner
            .headers()
            .context("failed to read table header")?
            .iter()
            .map(str::to_string)
            .collect::<Vec<_>>();

        let mut table = GeneTable::new(columns);
        for record in self.inner.records() {
            let record = record.context("failed to read table row")?;
            table.push_row(record.iter().map(str::to_string).collect())?;
        }

        debug!(
            "loaded table with {} columns and {} rows",
            table.columns().len(),
            table.len()
        );
        Ok(table)
    }
}
