use super::*;

fn demo_table() -> GeneTable {
    GeneTable::from_rows(
        vec![
            "Wm82v2 ID".to_string(),
            "Wm82v2 Chromosome".to_string(),
            "Wm82v2 Start Pair".to_string(),
            "Wm82v2 End Pair".to_string(),
        ],
        vec![
            vec![
                "Glyma05g001".to_string(),
                "5".to_string(),
                "100".to_string(),
                "200".to_string(),
            ],
            vec![
                "Glyma05g002".to_string(),
                "5".to_string(),
                "400".to_string(),
                "500".to_string(),
            ],
        ],
    )
    .unwrap()
}

#[test]
fn test_column_lookup_is_verbatim() {
    let table = demo_table();
    assert_eq!(table.column_index("Wm82v2 Chromosome"), Some(1));
    // No trimming or case folding on lookup
    assert_eq!(table.column_index("Wm82v2 Chromosome "), None);
    assert_eq!(table.column_index("wm82v2 chromosome"), None);
}

#[test]
fn test_cell_access() {
    let table = demo_table();
    assert_eq!(table.get(0, "Wm82v2 ID"), Some("Glyma05g001"));
    assert_eq!(table.get(1, "Wm82v2 End Pair"), Some("500"));
    assert_eq!(table.get(2, "Wm82v2 ID"), None);
    assert_eq!(table.get(0, "Nonexistent"), None);
}

#[test]
fn test_push_row_rejects_ragged_rows() {
    let mut table = demo_table();
    let result = table.push_row(vec!["only".to_string(), "three".to_string(), "cells".to_string()]);
    assert!(result.is_err());
    assert_eq!(table.len(), 2);
}

#[test]
fn test_append_column() {
    let mut table = demo_table();
    table
        .append_column(
            "Wm82v6 ID".to_string(),
            vec!["Glyma.05G001".to_string(), String::new()],
        )
        .unwrap();

    assert_eq!(table.columns().last().map(String::as_str), Some("Wm82v6 ID"));
    assert_eq!(table.get(0, "Wm82v6 ID"), Some("Glyma.05G001"));
    assert_eq!(table.get(1, "Wm82v6 ID"), Some(""));
}

#[test]
fn test_append_column_rejects_length_mismatch() {
    let mut table = demo_table();
    assert!(table
        .append_column("Extra".to_string(), vec!["x".to_string()])
        .is_err());
    assert!(table
        .append_column("Wm82v2 ID".to_string(), vec!["x".to_string(), "y".to_string()])
        .is_err());
}

#[test]
fn test_filter_preserves_order_and_columns() {
    let table = demo_table();
    let filtered = table.filter(|row| row[0].starts_with("Glyma05"));
    assert_eq!(filtered.columns(), table.columns());
    assert_eq!(filtered.len(), 2);

    let filtered = table.filter(|row| row[2] == "400");
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered.get(0, "Wm82v2 ID"), Some("Glyma05g002"));
    // The input table is untouched
    assert_eq!(table.len(), 2);
}

#[test]
fn test_assembly_column_derivation() {
    let columns = AssemblyColumns::new("Wm82v6");
    assert_eq!(columns.chromosome(), "Wm82v6 Chromosome");
    assert_eq!(columns.start(), "Wm82v6 Start Pair");
    assert_eq!(columns.end(), "Wm82v6 End Pair");
    assert_eq!(id_column("Wm82v6"), "Wm82v6 ID");
    assert_eq!(description_column("Wm82v6"), "Wm82v6 Description");
}

#[test]
fn test_resolve_known_assembly() {
    let table = demo_table();
    let resolved = AssemblyColumns::new("Wm82v2").resolve(&table).unwrap();
    assert_eq!(resolved.chromosome, 1);
    assert_eq!(resolved.start, 2);
    assert_eq!(resolved.end, 3);
}

#[test]
fn test_resolve_enumerates_every_missing_column() {
    let table = demo_table();
    let error = AssemblyColumns::new("Wm82v6").resolve(&table).unwrap_err();
    assert_eq!(error.columns(), &[
        "Wm82v6 Chromosome".to_string(),
        "Wm82v6 Start Pair".to_string(),
        "Wm82v6 End Pair".to_string(),
    ]);

    let mut table = demo_table();
    table
        .append_column("Wm82v6 Chromosome".to_string(), vec![
            "5".to_string(),
            "5".to_string(),
        ])
        .unwrap();
    table
        .append_column("Wm82v6 Start Pair".to_string(), vec![
            "1".to_string(),
            "2".to_string(),
        ])
        .unwrap();
    let error = AssemblyColumns::new("Wm82v6").resolve(&table).unwrap_err();
    assert_eq!(error.columns(), &["Wm82v6 End Pair".to_string()]);
    assert!(error.to_string().contains("Wm82v6 End Pair"));
}
