use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::Context;
use log::debug;

use crate::data_structs::GeneTable;

/// Writes a gene table to a sink in tab-delimited form.
///
/// Column order and the header line are preserved exactly; no row-index
/// column is ever emitted.
pub struct TableWriter<W: Write> {
    inner: csv::Writer<W>,
}

impl TableWriter<File> {
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("failed to create table {}", path.display()))?;
        Ok(Self::new(file))
    }
}

impl<W: Write> TableWriter<W> {
    pub fn new(writer: W) -> Self {
        let inner = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .from_writer(writer);
        Self { inner }
    }

    /// Writes the header line and every row.
    pub fn write_table(
        &mut self,
        table: &GeneTable,
    ) -> anyhow::Result<()> {
        self.inner
            .write_record(table.columns())
            .context("failed to write table header")?;
        for row in table.rows() {
            self.inner
                .write_record(row)
                .context("failed to write table row")?;
        }
        debug!("wrote table with {} rows", table.len());
        Ok(())
    }

    /// Flushes buffered output to the sink.
    pub fn finish(mut self) -> anyhow::Result<()> {
        self.inner.flush().context("failed to flush table")?;
        Ok(())
    }
}
