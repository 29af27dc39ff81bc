//! Specs workbook loading against fixture files.

use calamine::Data;
use onsset_runner::error::RunnerError;
use onsset_runner::specs::SpecsTable;
use rust_xlsxwriter::Workbook;
use std::path::Path;
use tempfile::tempdir;

fn write_specs(path: &Path, rows: &[(&str, f64, f64)]) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write(0, 0, "Country").unwrap();
    sheet.write(0, 1, "Pop2020").unwrap();
    sheet.write(0, 2, "GridPrice").unwrap();
    for (i, (key, pop, price)) in rows.iter().enumerate() {
        let row = (i + 1) as u32;
        sheet.write(row, 0, *key).unwrap();
        sheet.write(row, 1, *pop).unwrap();
        sheet.write(row, 2, *price).unwrap();
    }
    workbook.save(path).unwrap();
}

#[test]
fn test_load_indexes_rows_by_first_column() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("specs.xlsx");
    write_specs(
        &path,
        &[("na-26", 2_400_000.0, 0.08), ("na-27", 1_100_000.0, 0.11)],
    );

    let table = SpecsTable::load(&path).unwrap();

    assert_eq!(table.len(), 2);
    assert_eq!(table.index_name(), "Country");
    assert_eq!(table.columns(), ["Pop2020", "GridPrice"]);
    assert_eq!(table.keys(), ["na-26", "na-27"]);
    assert!(table.contains_key("na-27"));
    assert!(!table.contains_key("na-99"));

    let row = table.get("na-26").unwrap();
    assert_eq!(row, [Data::Float(2_400_000.0), Data::Float(0.08)]);
}

#[test]
fn test_load_skips_blank_index_rows() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("specs.xlsx");

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write(0, 0, "Country").unwrap();
    sheet.write(0, 1, "Pop2020").unwrap();
    sheet.write(1, 0, "na-26").unwrap();
    sheet.write(1, 1, 2_400_000).unwrap();
    // Row 2 has a value but no index key.
    sheet.write(2, 1, 999).unwrap();
    sheet.write(3, 0, "na-27").unwrap();
    sheet.write(3, 1, 1_100_000).unwrap();
    workbook.save(&path).unwrap();

    let table = SpecsTable::load(&path).unwrap();
    assert_eq!(table.keys(), ["na-26", "na-27"]);
}

#[test]
fn test_header_only_workbook_is_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("specs.xlsx");
    write_specs(&path, &[]);

    let table = SpecsTable::load(&path).unwrap();
    assert!(table.is_empty());
    assert_eq!(table.index_name(), "Country");
}

#[test]
fn test_missing_file_is_an_error() {
    let result = SpecsTable::load(Path::new("/nonexistent/specs.xlsx"));
    assert!(matches!(result, Err(RunnerError::SpecsLoad(_))));
}

#[test]
fn test_path_is_kept_for_pass_through() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("specs.xlsx");
    write_specs(&path, &[("na-26", 1.0, 2.0)]);

    let table = SpecsTable::load(&path).unwrap();
    assert_eq!(table.path(), path);
}
