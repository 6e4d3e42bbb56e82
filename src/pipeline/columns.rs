//! Column selection shared by every cleaning step

use polars::prelude::*;

/// Names of all primitive numeric columns (integers and floats), in table order.
pub fn numeric_columns(df: &DataFrame) -> Vec<String> {
    df.get_columns()
        .iter()
        .filter(|col| col.dtype().is_primitive_numeric())
        .map(|col| col.name().to_string())
        .collect()
}

/// Resolve an optional column request against the DataFrame.
///
/// - `None` selects every numeric column in table order.
/// - `Some(names)` keeps the requested names that exist, in requested order.
///   Unknown names are dropped and repeated names are kept once.
///
/// An empty result is valid and makes the calling step a no-op.
pub fn select_columns(df: &DataFrame, requested: Option<&[&str]>) -> Vec<String> {
    let Some(requested) = requested else {
        return numeric_columns(df);
    };

    let mut selected: Vec<String> = Vec::with_capacity(requested.len());
    for &name in requested {
        if df.get_column_index(name).is_some() && !selected.iter().any(|s| s == name) {
            selected.push(name.to_string());
        }
    }
    selected
}

/// Whether the named column exists and has a primitive numeric dtype.
pub fn is_numeric_column(df: &DataFrame, name: &str) -> bool {
    df.column(name)
        .map(|col| col.dtype().is_primitive_numeric())
        .unwrap_or(false)
}
