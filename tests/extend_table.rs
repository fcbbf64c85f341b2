use std::fs::File;

use genebrowse::prelude::*;
use tempfile::NamedTempFile;

mod common;
use common::{write_temp, GOLD_STANDARD};

const NAME_MAP: &str = "\
# new locus, old locus, new transcript, old transcript\n\
Glyma.05G0001\tGlyma.05G001\tGlyma.05G0001.1\tGlyma.05G001.1\n\
Glyma.07G0001\tGlyma.07G001\tGlyma.07G0001.1\tGlyma.07G001.1\n";

const GFF: &str = "\
##gff-version 3\n\
Gm05\tphytozomev13\tgene\t180\t280\t.\t+\t.\tID=Glyma.05G0001.Wm82.gnm6;Name=Glyma.05G0001\n\
Gm05\tphytozomev13\tmRNA\t180\t280\t.\t+\t.\tID=Glyma.05G0001.1;Parent=Glyma.05G0001.Wm82.gnm6\n\
Gm07\tphytozomev13\tgene\t95\t195\t.\t-\t.\tID=Glyma.07G0001.Wm82.gnm6;Name=Glyma.07G0001\n";

const ANNOTATION: &str = "\
pacId\tlocusName\ttranscriptName\tBest-hit-arabi-defline\n\
10\tGlyma.05G0001\tGlyma.05G0001.1\tlate embryogenesis abundant protein\n\
11\tGlyma.07G0001\tGlyma.07G0001.1\tleucine-rich repeat kinase\n";

fn extended_table() -> anyhow::Result<GeneTable> {
    let name_map = write_temp(NAME_MAP);
    let gff = write_temp(GFF);
    let annotation = write_temp(ANNOTATION);

    let extender = TableExtender::new("Wm82v4", "Wm82v6")
        .with_name_map(File::open(name_map.path())?)?
        .with_gene_models(File::open(gff.path())?)?
        .with_annotation_info(File::open(annotation.path())?)?;

    let input = write_temp(GOLD_STANDARD);
    let table = TableReader::from_path(input.path())?.finish()?;
    extender.extend(&table)
}

#[test]
fn test_extension_appends_columns_in_order() -> anyhow::Result<()> {
    let extended = extended_table()?;
    let appended = extended
        .columns()
        .iter()
        .skip(9)
        .map(String::as_str)
        .collect::<Vec<_>>();
    assert_eq!(appended, vec![
        "Wm82v6 ID",
        "Wm82v6 Chromosome",
        "Wm82v6 Start Pair",
        "Wm82v6 End Pair",
        "Wm82v6 Description",
    ]);
    Ok(())
}

#[test]
fn test_extension_joins_across_versions() -> anyhow::Result<()> {
    let extended = extended_table()?;

    // alpha: Wm82v4 ID Glyma.05G001 -> Wm82v6 Glyma.05G0001
    assert_eq!(extended.get(0, "Wm82v6 ID"), Some("Glyma.05G0001"));
    assert_eq!(extended.get(0, "Wm82v6 Chromosome"), Some("5"));
    assert_eq!(extended.get(0, "Wm82v6 Start Pair"), Some("180"));
    assert_eq!(extended.get(0, "Wm82v6 End Pair"), Some("280"));
    assert_eq!(
        extended.get(0, "Wm82v6 Description"),
        Some("late embryogenesis abundant protein")
    );

    // beta has no mapping; every appended cell stays empty
    assert_eq!(extended.get(1, "Wm82v6 ID"), Some(""));
    assert_eq!(extended.get(1, "Wm82v6 Description"), Some(""));

    // gamma maps to chromosome 7
    assert_eq!(extended.get(2, "Wm82v6 ID"), Some("Glyma.07G0001"));
    assert_eq!(extended.get(2, "Wm82v6 Chromosome"), Some("7"));
    Ok(())
}

#[test]
fn test_extended_table_answers_new_version_queries() -> anyhow::Result<()> {
    let extended = extended_table()?;

    // The extended table is immediately queryable in the new version
    let hits = query_region(&extended, &RegionQuery::new("Wm82v6", 5, 200, 300))?;
    assert_eq!(hits.len(), 1);
    assert_eq!(hits.get(0, "Gene Name"), Some("alpha"));

    // And still answers old-version queries untouched
    let hits = query_region(&extended, &RegionQuery::new("Wm82v2", 7, 100, 200))?;
    assert_eq!(hits.len(), 1);
    assert_eq!(hits.get(0, "Gene Name"), Some("gamma"));
    Ok(())
}

#[test]
fn test_extension_survives_a_file_round_trip() -> anyhow::Result<()> {
    let extended = extended_table()?;
    let output = NamedTempFile::new()?;

    let mut writer = TableWriter::from_path(output.path())?;
    writer.write_table(&extended)?;
    writer.finish()?;

    let reloaded = TableReader::from_path(output.path())?.finish()?;
    assert_eq!(reloaded, extended);
    Ok(())
}
