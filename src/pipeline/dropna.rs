//! Row removal based on missing values

use std::fmt;
use std::str::FromStr;

use polars::prelude::*;
use tracing::info;

use super::columns::select_columns;
use super::error::{CleaningError, CleaningResult};
use super::missing::missing_flags;

/// Rule deciding which incomplete rows are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropHow {
    /// Drop a row if any considered column is missing
    #[default]
    Any,
    /// Drop a row only if every considered column is missing
    All,
}

impl FromStr for DropHow {
    type Err = CleaningError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "any" => Ok(DropHow::Any),
            "all" => Ok(DropHow::All),
            _ => Err(CleaningError::invalid(
                "how",
                format!("expected one of {{\"any\", \"all\"}}, got \"{}\"", s),
            )),
        }
    }
}

impl fmt::Display for DropHow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DropHow::Any => write!(f, "any"),
            DropHow::All => write!(f, "all"),
        }
    }
}

/// Drop rows that contain missing values.
///
/// # Arguments
/// * `df` - Input DataFrame (left untouched)
/// * `how` - Rule applied when `thresh` is not given
/// * `thresh` - Minimum number of present values required to keep a row.
///   Overrides `how` when provided.
/// * `subset` - Columns to consider. `None` considers every column; unknown
///   names are ignored.
///
/// Surviving rows keep their original order. If no column is considered the
/// frame is returned as-is.
pub fn drop_missing(
    df: &DataFrame,
    how: DropHow,
    thresh: Option<usize>,
    subset: Option<&[&str]>,
) -> CleaningResult<DataFrame> {
    let considered: Vec<String> = match subset {
        Some(_) => select_columns(df, subset),
        None => df
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect(),
    };

    let rows_before = df.height();

    let out = if considered.is_empty() {
        df.clone()
    } else {
        let mut present_counts = vec![0usize; rows_before];
        for name in &considered {
            let flags = missing_flags(df.column(name)?)?;
            for (count, missing) in present_counts.iter_mut().zip(flags) {
                if !missing {
                    *count += 1;
                }
            }
        }

        let width = considered.len();
        let keep: BooleanChunked = present_counts
            .iter()
            .map(|&present| match (thresh, how) {
                (Some(min_present), _) => present >= min_present,
                (None, DropHow::Any) => present == width,
                (None, DropHow::All) => present > 0,
            })
            .collect();

        df.filter(&keep)?
    };

    let rows_after = out.height();
    info!(
        operation = "drop_missing",
        rows_before,
        rows_after,
        rows_dropped = rows_before - rows_after,
        how = %how,
        thresh = ?thresh,
        subset = ?subset,
        "Dropped rows with missing values"
    );

    Ok(out)
}
