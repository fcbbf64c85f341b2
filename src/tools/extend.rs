//! Gold Standard List extension.
//!
//! Joins three annotation sources onto a gene table to append one new
//! assembly version's columns, keyed off an existing version's gene IDs:
//!
//! 1. a locus/transcript name map giving the old-version to new-version
//!    gene ID mapping;
//! 2. GFF3 gene models giving the new version's chromosome, start, and end
//!    for each gene ID;
//! 3. an annotation info file giving the functional description per locus.
//!
//! Unmatched rows get empty cells; all original columns pass through
//! untouched.

use std::io::Read;

use anyhow::Context;
use hashbrown::HashMap;
use log::{debug, info};
use once_cell::sync::Lazy;
use regex_lite::Regex;

use crate::data_structs::{
    description_column,
    id_column,
    AssemblyColumns,
    GeneTable,
    MissingColumns,
};
use crate::io::gff::GffReader;

const GENE_FEATURE: &str = "gene";
const NAME_ATTRIBUTE: &str = "Name";
const LOCUS_NAME_COLUMN: &str = "locusName";
const DEFLINE_COLUMN: &str = "Best-hit-arabi-defline";

/// Chromosome number embedded in a seqid such as `Gm05` or `Gm20`.
static SEQID_CHROMOSOME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Gm(\d+)").expect("invalid seqid pattern"));

#[derive(Debug, Clone, Default)]
struct GeneCoords {
    chromosome: String,
    start:      String,
    end:        String,
}

/// Builds the extended Gold Standard List for one target assembly version.
///
/// Annotation sources are loaded with the `with_*` builders; [`extend`]
/// then appends `"{target} ID"`, the three coordinate columns, and
/// `"{target} Description"` to a table, mapping from its
/// `"{source} ID"` column.
///
/// [`extend`]: TableExtender::extend
#[derive(Debug, Clone)]
pub struct TableExtender {
    source:       String,
    target:       String,
    gene_map:     HashMap<String, String>,
    coords:       HashMap<String, GeneCoords>,
    descriptions: HashMap<String, String>,
}

impl TableExtender {
    pub fn new<S: Into<String>, T: Into<String>>(
        source: S,
        target: T,
    ) -> Self {
        Self {
            source:       source.into(),
            target:       target.into(),
            gene_map:     HashMap::new(),
            coords:       HashMap::new(),
            descriptions: HashMap::new(),
        }
    }

    /// Loads the locus/transcript name map.
    ///
    /// Tab-delimited, `#` comment lines, no header; the first two columns
    /// are the new-version and old-version locus IDs. Rows with an empty
    /// old locus are dropped and the first occurrence of an old locus wins.
    pub fn with_name_map<R: Read>(
        mut self,
        reader: R,
    ) -> anyhow::Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .comment(Some(b'#'))
            .from_reader(reader);

        for record in csv_reader.records() {
            let record = record.context("failed to read name map record")?;
            let new_locus = record.get(0).unwrap_or("");
            let old_locus = record.get(1).unwrap_or("");
            if old_locus.is_empty() {
                continue;
            }
            self.gene_map
                .entry_ref(old_locus)
                .or_insert_with(|| new_locus.to_string());
        }

        debug!("loaded {} locus mappings", self.gene_map.len());
        Ok(self)
    }

    /// Loads gene coordinates from GFF3 gene models.
    ///
    /// Only `gene` features are kept; the gene ID is the `Name=` attribute
    /// and the chromosome number is extracted from the seqid. The first
    /// occurrence of a gene ID wins.
    pub fn with_gene_models<R: Read>(
        mut self,
        reader: R,
    ) -> anyhow::Result<Self> {
        for record in GffReader::new(reader).finish()? {
            if record.feature_type != GENE_FEATURE {
                continue;
            }
            let Some(name) = record.attribute(NAME_ATTRIBUTE) else {
                continue;
            };
            let chromosome = SEQID_CHROMOSOME
                .captures(&record.seqid)
                .and_then(|captures| captures.get(1))
                .and_then(|m| m.as_str().parse::<u32>().ok())
                .map(|number| number.to_string())
                .unwrap_or_default();

            if !self.coords.contains_key(name) {
                self.coords.insert(name.to_string(), GeneCoords {
                    chromosome,
                    start: record.start.clone(),
                    end: record.end.clone(),
                });
            }
        }

        debug!("loaded coordinates for {} genes", self.coords.len());
        Ok(self)
    }

    /// Loads functional descriptions from an annotation info file.
    ///
    /// Tab-delimited with a header; requires the `locusName` and
    /// `Best-hit-arabi-defline` columns. The first occurrence of a locus
    /// wins.
    pub fn with_annotation_info<R: Read>(
        mut self,
        reader: R,
    ) -> anyhow::Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .from_reader(reader);

        let headers = csv_reader
            .headers()
            .context("failed to read annotation info header")?
            .clone();
        let locus = headers.iter().position(|name| name == LOCUS_NAME_COLUMN);
        let defline = headers.iter().position(|name| name == DEFLINE_COLUMN);
        let (locus, defline) = match (locus, defline) {
            (Some(locus), Some(defline)) => (locus, defline),
            _ => {
                let missing = [
                    (locus, LOCUS_NAME_COLUMN),
                    (defline, DEFLINE_COLUMN),
                ]
                .into_iter()
                .filter(|(index, _)| index.is_none())
                .map(|(_, name)| name.to_string())
                .collect();
                return Err(MissingColumns::new(missing).into());
            },
        };

        for record in csv_reader.records() {
            let record = record.context("failed to read annotation info record")?;
            let name = record.get(locus).unwrap_or("");
            if name.is_empty() {
                continue;
            }
            self.descriptions
                .entry_ref(name)
                .or_insert_with(|| record.get(defline).unwrap_or("").to_string());
        }

        debug!("loaded {} descriptions", self.descriptions.len());
        Ok(self)
    }

    /// Returns a new table with the target version's columns appended.
    ///
    /// Appends, in order: `"{target} ID"`, `"{target} Chromosome"`,
    /// `"{target} Start Pair"`, `"{target} End Pair"`, and
    /// `"{target} Description"`. Requires the `"{source} ID"` column.
    pub fn extend(
        &self,
        table: &GeneTable,
    ) -> anyhow::Result<GeneTable> {
        let source_id = id_column(&self.source);
        let source_index = table
            .column_index(&source_id)
            .ok_or_else(|| MissingColumns::new(vec![source_id.clone()]))?;

        let mut new_ids = Vec::with_capacity(table.len());
        let mut chromosomes = Vec::with_capacity(table.len());
        let mut starts = Vec::with_capacity(table.len());
        let mut ends = Vec::with_capacity(table.len());
        let mut deflines = Vec::with_capacity(table.len());

        for row in table.rows() {
            let new_id = self
                .gene_map
                .get(row[source_index].as_str())
                .cloned()
                .unwrap_or_default();

            // An unmapped row must not join on the empty string
            let coords = (!new_id.is_empty())
                .then(|| self.coords.get(new_id.as_str()))
                .flatten();
            chromosomes.push(coords.map(|c| c.chromosome.clone()).unwrap_or_default());
            starts.push(coords.map(|c| c.start.clone()).unwrap_or_default());
            ends.push(coords.map(|c| c.end.clone()).unwrap_or_default());

            let defline = (!new_id.is_empty())
                .then(|| self.descriptions.get(new_id.as_str()))
                .flatten();
            deflines.push(defline.cloned().unwrap_or_default());

            new_ids.push(new_id);
        }

        let target_columns = AssemblyColumns::new(&self.target);
        let mut extended = table.clone();
        extended.append_column(id_column(&self.target), new_ids)?;
        extended.append_column(target_columns.chromosome().to_string(), chromosomes)?;
        extended.append_column(target_columns.start().to_string(), starts)?;
        extended.append_column(target_columns.end().to_string(), ends)?;
        extended.append_column(description_column(&self.target), deflines)?;

        info!(
            "extended table from {} to {} ({} rows)",
            self.source,
            self.target,
            extended.len()
        );
        Ok(extended)
    }
}
