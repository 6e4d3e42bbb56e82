//! Shared test utilities and fixture generators

#![allow(dead_code)]

use polars::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Mixed-type frame with missing cells in several columns
///
/// - `age`: float with one null (median of present values is 30)
/// - `income`: float with a NaN and a null
/// - `visits`: integer, complete
/// - `city`: string with one null (non-numeric)
pub fn create_people_dataframe() -> DataFrame {
    df! {
        "age" => [Some(20.0f64), None, Some(40.0), Some(30.0)],
        "income" => [Some(1000.0f64), Some(f64::NAN), None, Some(3000.0)],
        "visits" => [1i64, 2, 3, 4],
        "city" => [Some("Cape Town"), None, Some("Durban"), Some("Paarl")],
    }
    .unwrap()
}

/// Three rows: partially missing, fully missing, complete
pub fn create_partial_rows_dataframe() -> DataFrame {
    df! {
        "a" => [Some(1.0f64), None, Some(3.0)],
        "b" => [None::<f64>, None, Some(4.0)],
    }
    .unwrap()
}

/// Frame with a constant column next to a varying one
pub fn create_constant_dataframe() -> DataFrame {
    df! {
        "flat" => [5.0f64; 4],
        "x" => [1.0f64, 2.0, 3.0, 4.0],
    }
    .unwrap()
}

/// Larger random frame with roughly `missing_pct` missing cells per column
pub fn create_random_dataframe(rows: usize, cols: usize, missing_pct: f64, seed: u64) -> DataFrame {
    use rand::{Rng, SeedableRng};
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);

    let columns: Vec<Column> = (0..cols)
        .map(|i| {
            let values: Vec<Option<f64>> = (0..rows)
                .map(|_| {
                    if rng.gen::<f64>() < missing_pct {
                        None
                    } else {
                        Some(rng.gen::<f64>() * 100.0)
                    }
                })
                .collect();
            Column::new(format!("feature_{}", i).into(), values)
        })
        .collect();

    DataFrame::new(columns).unwrap()
}

/// Create a temporary directory with a test CSV file
pub fn create_temp_csv(df: &mut DataFrame) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("test_data.csv");

    let mut file = std::fs::File::create(&csv_path).unwrap();
    CsvWriter::new(&mut file).finish(df).unwrap();

    (temp_dir, csv_path)
}

/// Create a temporary directory with a test Parquet file
pub fn create_temp_parquet(df: &mut DataFrame) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let parquet_path = temp_dir.path().join("test_data.parquet");

    let file = std::fs::File::create(&parquet_path).unwrap();
    ParquetWriter::new(file).finish(df).unwrap();

    (temp_dir, parquet_path)
}

/// Column values as `Option<f64>`, NaN kept as `Some(NaN)`
pub fn f64_values(df: &DataFrame, name: &str) -> Vec<Option<f64>> {
    df.column(name)
        .unwrap()
        .cast(&DataType::Float64)
        .unwrap()
        .f64()
        .unwrap()
        .iter()
        .collect()
}

/// Assert two float slices match within an absolute tolerance
pub fn assert_close(actual: &[f64], expected: &[f64], tol: f64) {
    assert_eq!(actual.len(), expected.len(), "Length mismatch");
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            (a - e).abs() <= tol,
            "Value {} differs: expected {}, got {}",
            i,
            e,
            a
        );
    }
}

/// Assert that a DataFrame has expected shape
pub fn assert_shape(df: &DataFrame, expected_rows: usize, expected_cols: usize) {
    let (rows, cols) = df.shape();
    assert_eq!(rows, expected_rows, "Row count mismatch: expected {}, got {}", expected_rows, rows);
    assert_eq!(cols, expected_cols, "Column count mismatch: expected {}, got {}", expected_cols, cols);
}

/// Assert two frames hold the same names, dtypes and cell values (NaN equals NaN)
pub fn assert_frames_identical(actual: &DataFrame, expected: &DataFrame) {
    assert_eq!(actual.get_column_names(), expected.get_column_names());
    for (a, e) in actual.get_columns().iter().zip(expected.get_columns()) {
        assert_eq!(a.dtype(), e.dtype(), "Dtype mismatch in '{}'", a.name());
        let render = |c: &Column| -> Vec<String> {
            c.as_materialized_series()
                .iter()
                .map(|v| v.to_string())
                .collect()
        };
        assert_eq!(render(a), render(e), "Values differ in '{}'", a.name());
    }
}
