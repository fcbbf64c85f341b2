#![allow(dead_code)]

use std::io::Write;

use tempfile::NamedTempFile;

/// A small Gold Standard List slice with two assembly versions and
/// metadata columns the query engine must not interpret.
pub const GOLD_STANDARD: &str = "\
Gene Name\tWm82v2 ID\tWm82v2 Chromosome\tWm82v2 Start Pair\tWm82v2 End Pair\tWm82v4 ID\tWm82v4 Chromosome\tWm82v4 Start Pair\tWm82v4 End Pair\n\
alpha\tGlyma05g001\t5\t100\t200\tGlyma.05G001\t5\t150\t250\n\
beta\tGlyma05g002\t5\t400\t500\tGlyma.05G002\t5\t450\t550\n\
gamma\tGlyma07g001\t7\t100\t200\tGlyma.07G001\t7\t90\t190\n";

pub fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("failed to write temp file");
    file.flush().expect("failed to flush temp file");
    file
}
