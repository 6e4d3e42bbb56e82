//! Median imputation of missing numeric values

use polars::prelude::*;
use tracing::{debug, info};

use super::columns::{is_numeric_column, select_columns};
use super::error::CleaningResult;
use super::missing::missing_flags;
use super::stats::{median, present_values};

/// Median of each listed numeric column, computed over present values.
///
/// Non-numeric and unknown columns are left out. A column with no present
/// values reports `None`.
pub fn column_medians(
    df: &DataFrame,
    columns: &[String],
) -> CleaningResult<Vec<(String, Option<f64>)>> {
    let mut medians = Vec::with_capacity(columns.len());
    for name in columns {
        if !is_numeric_column(df, name) {
            debug!(column = %name, "Skipping non-numeric column");
            continue;
        }
        let values = present_values(df.column(name)?)?;
        medians.push((name.clone(), median(&values)));
    }
    Ok(medians)
}

/// Fill missing values in numeric columns with each column's median.
///
/// # Arguments
/// * `df` - Input DataFrame (left untouched)
/// * `columns` - Columns to fill. `None` fills every numeric column.
///
/// # Behavior
/// - Columns that receive at least one fill come back as `Float64`.
/// - Columns with nothing to fill are returned unchanged.
/// - A column whose values are all missing has no median; its cells stay missing.
pub fn fill_missing_median(df: &DataFrame, columns: Option<&[&str]>) -> CleaningResult<DataFrame> {
    let selected = select_columns(df, columns);
    let medians = column_medians(df, &selected)?;

    let mut out = df.clone();
    for (name, col_median) in &medians {
        let Some(fill) = *col_median else {
            debug!(column = %name, "No present values, median undefined; cells left missing");
            continue;
        };

        let column = df.column(name)?;
        let flags = missing_flags(column)?;
        if !flags.contains(&true) {
            continue;
        }

        let float_col = column.cast(&DataType::Float64)?;
        let filled: Float64Chunked = float_col
            .f64()?
            .iter()
            .zip(&flags)
            .map(|(v, &missing)| if missing { Some(fill) } else { v })
            .collect();

        out.with_column(filled.with_name(name.as_str().into()).into_series())?;
    }

    info!(
        operation = "fill_missing_median",
        columns = ?selected,
        medians = ?medians,
        "Filled missing values with column medians"
    );

    Ok(out)
}
