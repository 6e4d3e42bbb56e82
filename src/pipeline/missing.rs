//! Missing value detection and analysis
//!
//! A cell counts as missing when it is null, or when it holds `NaN` in a
//! floating-point column.

use anyhow::Result;
use polars::prelude::*;

/// Per-row missing flags for a single column.
pub fn missing_flags(column: &Column) -> PolarsResult<Vec<bool>> {
    if column.dtype().is_float() {
        let float_col = column.cast(&DataType::Float64)?;
        Ok(float_col
            .f64()?
            .iter()
            .map(|v| v.map_or(true, f64::is_nan))
            .collect())
    } else {
        Ok(column
            .as_materialized_series()
            .is_null()
            .iter()
            .map(|v| v.unwrap_or(false))
            .collect())
    }
}

/// Count missing cells in one column.
pub fn count_missing(column: &Column) -> PolarsResult<usize> {
    Ok(missing_flags(column)?.into_iter().filter(|&m| m).count())
}

/// Count missing cells across every column of the DataFrame.
pub fn count_missing_cells(df: &DataFrame) -> Result<usize> {
    let mut total = 0;
    for column in df.get_columns() {
        total += count_missing(column)?;
    }
    Ok(total)
}

/// Analyze missing values in the dataset.
///
/// Returns `(column, missing_ratio)` pairs sorted by ratio descending.
/// An empty DataFrame yields an empty list.
pub fn analyze_missing_values(df: &DataFrame) -> Result<Vec<(String, f64)>> {
    if df.height() == 0 {
        return Ok(Vec::new());
    }

    let rows = df.height() as f64;
    let mut missing_ratios: Vec<(String, f64)> = Vec::with_capacity(df.width());

    for column in df.get_columns() {
        let missing = count_missing(column)? as f64;
        missing_ratios.push((column.name().to_string(), missing / rows));
    }

    // Sort by missing ratio descending
    missing_ratios.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    Ok(missing_ratios)
}
