//! Unit tests for dataset loading and saving

use cleanframe::pipeline::{get_column_names, load_dataset, load_dataset_with_progress, save_dataset};
use polars::prelude::*;
use std::io::Write;
use tempfile::TempDir;

#[path = "common/mod.rs"]
mod common;

#[test]
fn test_load_csv_file() {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("test.csv");

    let mut file = std::fs::File::create(&csv_path).unwrap();
    writeln!(file, "a,b,c").unwrap();
    writeln!(file, "1,2,3").unwrap();
    writeln!(file, "4,5,6").unwrap();
    drop(file);

    let (df, rows, cols, mem_mb) = load_dataset_with_progress(&csv_path, 100).unwrap();

    assert_eq!(rows, 2, "Should have 2 data rows");
    assert_eq!(cols, 3, "Should have 3 columns");
    assert_eq!(df.get_column_names(), &["a", "b", "c"]);
    assert!(mem_mb >= 0.0, "Memory estimate should be non-negative");
}

#[test]
fn test_load_parquet_file() {
    let mut df = df! {
        "x" => [1i32, 2, 3],
        "y" => [4i32, 5, 6],
    }
    .unwrap();
    let (_temp_dir, parquet_path) = common::create_temp_parquet(&mut df);

    let loaded = load_dataset(&parquet_path, 100).unwrap();

    common::assert_shape(&loaded, 3, 2);
    assert_eq!(loaded.get_column_names(), &["x", "y"]);
}

#[test]
fn test_csv_empty_fields_load_as_nulls() {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("missing.csv");

    let mut file = std::fs::File::create(&csv_path).unwrap();
    writeln!(file, "a,b,c").unwrap();
    writeln!(file, "1,,3").unwrap();
    writeln!(file, ",2,").unwrap();
    writeln!(file, "4,5,6").unwrap();
    drop(file);

    let df = load_dataset(&csv_path, 100).unwrap();

    let null_counts: Vec<usize> = df.get_columns().iter().map(|c| c.null_count()).collect();
    assert_eq!(null_counts, vec![1, 1, 1]);
}

#[test]
fn test_get_column_names_csv() {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("test.csv");

    let mut file = std::fs::File::create(&csv_path).unwrap();
    writeln!(file, "col_a,col_b,col_c").unwrap();
    writeln!(file, "1,2,3").unwrap();
    drop(file);

    let columns = get_column_names(&csv_path).unwrap();

    assert_eq!(columns, vec!["col_a", "col_b", "col_c"]);
}

#[test]
fn test_get_column_names_skips_row_parsing() {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("late_bad_row.csv");

    let mut file = std::fs::File::create(&csv_path).unwrap();
    writeln!(file, "id,score").unwrap();
    for i in 0..150 {
        writeln!(file, "{},{}", i, i * 2).unwrap();
    }
    writeln!(file, "150,not_a_number").unwrap();
    drop(file);

    assert!(
        load_dataset(&csv_path, 100).is_err(),
        "Full load should fail on the unparsable row"
    );
    let columns = get_column_names(&csv_path).unwrap();

    assert_eq!(columns, vec!["id", "score"]);
}

#[test]
fn test_get_column_names_parquet() {
    let mut df = common::create_people_dataframe();
    let (_temp_dir, parquet_path) = common::create_temp_parquet(&mut df);

    let columns = get_column_names(&parquet_path).unwrap();

    assert_eq!(columns, vec!["age", "income", "visits", "city"]);
}

#[test]
fn test_save_and_reload_csv() {
    let mut df = common::create_constant_dataframe();
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("out.csv");

    save_dataset(&mut df, &path).unwrap();
    let reloaded = load_dataset(&path, 100).unwrap();

    common::assert_shape(&reloaded, 4, 2);
    assert_eq!(
        common::f64_values(&reloaded, "x"),
        vec![Some(1.0), Some(2.0), Some(3.0), Some(4.0)]
    );
}

#[test]
fn test_save_and_reload_parquet_keeps_nulls() {
    let mut df = common::create_partial_rows_dataframe();
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("out.parquet");

    save_dataset(&mut df, &path).unwrap();
    let reloaded = load_dataset(&path, 100).unwrap();

    common::assert_frames_identical(&reloaded, &common::create_partial_rows_dataframe());
}

#[test]
fn test_unsupported_format() {
    let temp_dir = TempDir::new().unwrap();
    let bad_path = temp_dir.path().join("test.xlsx");
    std::fs::File::create(&bad_path).unwrap();

    let result = load_dataset(&bad_path, 100);

    assert!(result.is_err(), "Unsupported format should return error");
    assert!(result.unwrap_err().to_string().contains("Unsupported"));
}

#[test]
fn test_unsupported_output_format() {
    let mut df = common::create_constant_dataframe();
    let temp_dir = TempDir::new().unwrap();

    let result = save_dataset(&mut df, &temp_dir.path().join("out.json"));

    assert!(result.is_err());
}

#[test]
fn test_nonexistent_file() {
    let path = std::path::Path::new("/nonexistent/path/to/file.csv");

    assert!(load_dataset_with_progress(path, 100).is_err());
}
