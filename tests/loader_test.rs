//! Loader behaviour against real files: header handling, failures and caching.

use food_waste_dashboard::data::{DataLoadError, DatasetLoader, Record};
use std::fs;
use std::sync::Arc;

const HEADER: &str = "Country,Year,Food Category,Total Waste (Tons),Economic Loss (Million $),Avg Waste per Capita (Kg),Household Waste (%)";

fn write_csv(dir: &tempfile::TempDir, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, body).unwrap();
    path
}

#[test]
fn loads_rows_in_file_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(
        &dir,
        "waste.csv",
        &format!("{HEADER}\nUSA,2020,Fruit,100,10,5,20\nIndia,2020,Grain,150.5,5,3,15\n"),
    );

    let ds = DatasetLoader::load(&path).unwrap();
    assert_eq!(
        ds.records(),
        &[
            Record::new("USA", 2020, "Fruit", 100.0, 10.0, 5.0, 20.0),
            Record::new("India", 2020, "Grain", 150.5, 5.0, 3.0, 15.0),
        ]
    );
}

#[test]
fn extra_and_reordered_columns_are_tolerated() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(
        &dir,
        "extra.csv",
        "Population (Million),Household Waste (%),Country,Year,Food Category,Total Waste (Tons),Economic Loss (Million $),Avg Waste per Capita (Kg)\n\
         331,20,USA,2020,Fruit,100,10,5\n",
    );

    let ds = DatasetLoader::read_csv(&path).unwrap();
    assert_eq!(ds.records()[0], Record::new("USA", 2020, "Fruit", 100.0, 10.0, 5.0, 20.0));
}

#[test]
fn missing_required_column_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(
        &dir,
        "short.csv",
        "Country,Year,Food Category,Total Waste (Tons)\nUSA,2020,Fruit,100\n",
    );

    match DatasetLoader::load(&path) {
        Err(DataLoadError::MissingColumn(name)) => assert_eq!(name, "Economic Loss (Million $)"),
        other => panic!("expected MissingColumn, got {other:?}"),
    }
    assert!(!DatasetLoader::is_cached(&path));
}

#[test]
fn missing_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let err = DatasetLoader::load(dir.path().join("nope.csv")).unwrap_err();
    assert!(matches!(err, DataLoadError::NotFound(_)));
    assert!(err.to_string().contains("nope.csv"));
}

#[test]
fn repeated_loads_reuse_the_cached_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(
        &dir,
        "cached.csv",
        &format!("{HEADER}\nUSA,2020,Fruit,100,10,5,20\n"),
    );

    let first = DatasetLoader::load(&path).unwrap();
    assert!(DatasetLoader::is_cached(&path));

    // The file is assumed static; a rewrite is not picked up.
    fs::write(&path, format!("{HEADER}\nChile,2022,Dairy,1,1,1,1\n")).unwrap();
    let second = DatasetLoader::load(&path).unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(second.records()[0].country, "USA");
}

#[test]
fn blank_numeric_cell_is_a_missing_value() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(
        &dir,
        "blank.csv",
        &format!("{HEADER}\nUSA,2020,Fruit,,10,5,20\n"),
    );

    match DatasetLoader::load(&path) {
        Err(DataLoadError::MissingValue { column, row }) => {
            assert_eq!(column, "Total Waste (Tons)");
            assert_eq!(row, 0);
        }
        other => panic!("expected MissingValue, got {other:?}"),
    }
    assert!(!DatasetLoader::is_cached(&path));
}

#[test]
fn non_numeric_cell_is_a_missing_value() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(
        &dir,
        "text.csv",
        &format!("{HEADER}\nUSA,2020,Fruit,abc,10,5,20\nIndia,2020,Grain,150,5,3,15\n"),
    );

    match DatasetLoader::load(&path) {
        Err(DataLoadError::MissingValue { column, row }) => {
            assert_eq!(column, "Total Waste (Tons)");
            assert_eq!(row, 0);
        }
        other => panic!("expected MissingValue, got {other:?}"),
    }
    assert!(!DatasetLoader::is_cached(&path));

    // Not cached, so a fixed file is read on the next attempt.
    fs::write(&path, format!("{HEADER}\nUSA,2020,Fruit,100,10,5,20\n")).unwrap();
    assert_eq!(DatasetLoader::load(&path).unwrap().len(), 1);
}

#[test]
fn header_only_file_is_an_empty_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "empty.csv", &format!("{HEADER}\n"));

    let ds = DatasetLoader::load(&path).unwrap();
    assert_eq!(ds.len(), 0);
    assert!(ds.countries().is_empty());
}
