//! Unit tests for missing value analysis

use cleanframe::pipeline::{analyze_missing_values, count_missing_cells};
use polars::prelude::*;

#[path = "common/mod.rs"]
mod common;

#[test]
fn test_ratios_sorted_descending() {
    let df = common::create_people_dataframe();

    let ratios = analyze_missing_values(&df).unwrap();

    assert_eq!(ratios[0], ("income".to_string(), 0.5));
    assert_eq!(ratios.last().unwrap(), &("visits".to_string(), 0.0));
}

#[test]
fn test_count_missing_cells_includes_nan() {
    let df = common::create_people_dataframe();

    // age 1 + income 2 (NaN and null) + city 1
    assert_eq!(count_missing_cells(&df).unwrap(), 4);
}

#[test]
fn test_empty_dataframe() {
    let df = DataFrame::empty();

    assert!(analyze_missing_values(&df).unwrap().is_empty());
    assert_eq!(count_missing_cells(&df).unwrap(), 0);
}

#[test]
fn test_with_integer_columns() {
    let df = df! {
        "int_col" => [Some(1i32), None, Some(3), Some(4), None],
        "float_col" => [1.0f64, 2.0, 3.0, 4.0, 5.0],
    }
    .unwrap();

    let ratios = analyze_missing_values(&df).unwrap();
    let ratio_map: std::collections::HashMap<_, _> = ratios.into_iter().collect();

    assert!((ratio_map["int_col"] - 0.4).abs() < 0.001);
    assert!((ratio_map["float_col"] - 0.0).abs() < 0.001);
}
