//! Raw GFF3 record reading for annotation joins.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::Context;
use log::debug;
use serde::{Deserialize, Serialize};

/// One GFF3 feature line, kept as unparsed text fields.
///
/// Coordinates stay text because downstream table cells are text; numeric
/// interpretation is the consumer's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawGffRecord {
    pub seqid:        String,
    pub source:       String,
    pub feature_type: String,
    pub start:        String,
    pub end:          String,
    pub score:        String,
    pub strand:       String,
    pub phase:        String,
    pub attributes:   String,
}

impl RawGffRecord {
    /// Returns the value of a `key=value` pair from the attributes column.
    pub fn attribute(
        &self,
        key: &str,
    ) -> Option<&str> {
        self.attributes.split(';').find_map(|pair| {
            let mut parts = pair.splitn(2, '=');
            match (parts.next(), parts.next()) {
                (Some(k), Some(value)) if k == key => Some(value),
                _ => None,
            }
        })
    }
}

/// Reads GFF3 feature lines from a source, skipping `#` comment lines.
pub struct GffReader<R: Read> {
    inner: csv::Reader<R>,
}

impl GffReader<File> {
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open GFF {}", path.display()))?;
        Ok(Self::new(file))
    }
}

impl<R: Read> GffReader<R> {
    pub fn new(reader: R) -> Self {
        let inner = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .comment(Some(b'#'))
            // GFF attribute text may carry stray quote characters
            .quoting(false)
            .from_reader(reader);
        Self { inner }
    }

    /// Consumes the source and returns every feature record.
    pub fn finish(mut self) -> anyhow::Result<Vec<RawGffRecord>> {
        let records = self
            .inner
            .deserialize()
            .collect::<Result<Vec<RawGffRecord>, _>>()
            .context("failed to read GFF record")?;
        debug!("loaded {} GFF records", records.len());
        Ok(records)
    }
}
