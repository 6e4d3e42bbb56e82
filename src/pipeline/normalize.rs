//! Feature scaling: standardization and min-max normalization

use std::fmt;
use std::slice;
use std::str::FromStr;

use polars::prelude::*;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::{debug, info};

use super::columns::{is_numeric_column, select_columns};
use super::error::{CleaningError, CleaningResult};
use super::stats::{min_max, population_mean_std, present_values};

/// Scaling method applied by [`normalize_data`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalizeMethod {
    /// z-score: `(x - mean) / std`
    #[default]
    Standard,
    /// `(x - min) / (max - min)`
    MinMax,
}

impl FromStr for NormalizeMethod {
    type Err = CleaningError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(NormalizeMethod::Standard),
            "minmax" => Ok(NormalizeMethod::MinMax),
            _ => Err(CleaningError::invalid(
                "method",
                format!(
                    "expected one of {{\"standard\", \"minmax\"}}, got \"{}\"",
                    s
                ),
            )),
        }
    }
}

impl fmt::Display for NormalizeMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NormalizeMethod::Standard => write!(f, "standard"),
            NormalizeMethod::MinMax => write!(f, "minmax"),
        }
    }
}

/// Statistics fitted for one column, tagged with the method that produced them.
///
/// Serializes as `{"method": "standard", "mean": .., "std": ..}` or
/// `{"method": "minmax", "min": .., "max": ..}`. A column with no present
/// values fits NaN statistics, written as `null` and read back as NaN.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "lowercase")]
pub enum ColumnFit {
    Standard {
        #[serde(with = "nan_as_null")]
        mean: f64,
        #[serde(with = "nan_as_null")]
        std: f64,
    },
    MinMax {
        #[serde(with = "nan_as_null")]
        min: f64,
        #[serde(with = "nan_as_null")]
        max: f64,
    },
}

mod nan_as_null {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_nan() {
            serializer.serialize_none()
        } else {
            serializer.serialize_some(value)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
    }
}

impl ColumnFit {
    /// Fit the method's statistics on present values.
    pub fn fit(values: &[f64], method: NormalizeMethod) -> Self {
        match method {
            NormalizeMethod::Standard => {
                let (mean, std) = population_mean_std(values);
                ColumnFit::Standard { mean, std }
            }
            NormalizeMethod::MinMax => {
                let (min, max) = min_max(values);
                ColumnFit::MinMax { min, max }
            }
        }
    }

    pub fn method(&self) -> NormalizeMethod {
        match self {
            ColumnFit::Standard { .. } => NormalizeMethod::Standard,
            ColumnFit::MinMax { .. } => NormalizeMethod::MinMax,
        }
    }

    /// Zero std (standard) or zero range (minmax). Such columns scale to all zeros.
    pub fn is_degenerate(&self) -> bool {
        match *self {
            ColumnFit::Standard { std, .. } => std == 0.0,
            ColumnFit::MinMax { min, max } => max == min,
        }
    }

    fn scale(&self, x: f64) -> f64 {
        match *self {
            ColumnFit::Standard { mean, std } => (x - mean) / std,
            ColumnFit::MinMax { min, max } => (x - min) / (max - min),
        }
    }

    /// Scale a numeric column, producing a `Float64` series of the same name.
    ///
    /// Degenerate fits yield a column of zeros over every row, missing cells
    /// included. Otherwise missing cells stay missing.
    pub fn transform(&self, column: &Column) -> PolarsResult<Series> {
        let name = column.name().clone();
        if self.is_degenerate() {
            return Ok(Float64Chunked::full(name, 0.0, column.len()).into_series());
        }

        let float_col = column.cast(&DataType::Float64)?;
        let scaled: Float64Chunked = float_col
            .f64()?
            .iter()
            .map(|v| v.map(|x| self.scale(x)))
            .collect();
        Ok(scaled.with_name(name).into_series())
    }
}

/// Fitted parameters keyed by column name, one entry per processed column.
///
/// Entries keep the order columns were processed in, and serialize as a JSON
/// object in that order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FitParams(Vec<(String, ColumnFit)>);

type Entry<'a> = (&'a String, &'a ColumnFit);
type Entries<'a> =
    std::iter::Map<slice::Iter<'a, (String, ColumnFit)>, fn(&'a (String, ColumnFit)) -> Entry<'a>>;

fn as_entry(pair: &(String, ColumnFit)) -> Entry<'_> {
    (&pair.0, &pair.1)
}

impl FitParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a fit, replacing an existing entry for the same column in place.
    pub fn insert(&mut self, column: impl Into<String>, fit: ColumnFit) {
        let column = column.into();
        match self.0.iter_mut().find(|(name, _)| *name == column) {
            Some(entry) => entry.1 = fit,
            None => self.0.push((column, fit)),
        }
    }

    pub fn get(&self, column: &str) -> Option<&ColumnFit> {
        self.0
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, fit)| fit)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in processing order.
    pub fn iter<'a>(&'a self) -> Entries<'a> {
        let entry: fn(&'a (String, ColumnFit)) -> Entry<'a> = as_entry;
        self.0.iter().map(entry)
    }

    pub fn columns(&self) -> Vec<String> {
        self.0.iter().map(|(name, _)| name.clone()).collect()
    }
}

impl<'a> IntoIterator for &'a FitParams {
    type Item = Entry<'a>;
    type IntoIter = Entries<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for FitParams {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, fit) in &self.0 {
            map.serialize_entry(name, fit)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for FitParams {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FitParamsVisitor;

        impl<'de> Visitor<'de> for FitParamsVisitor {
            type Value = FitParams;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of column name to fitted statistics")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<FitParams, A::Error> {
                let mut params = FitParams::new();
                while let Some((name, fit)) = access.next_entry::<String, ColumnFit>()? {
                    params.insert(name, fit);
                }
                Ok(params)
            }
        }

        deserializer.deserialize_map(FitParamsVisitor)
    }
}

fn ensure_numeric(df: &DataFrame, name: &str) -> CleaningResult<()> {
    if is_numeric_column(df, name) {
        return Ok(());
    }
    let dtype = df.column(name)?.dtype().clone();
    Err(CleaningError::invalid(
        "columns",
        format!("column '{}' is not numeric (dtype {})", name, dtype),
    ))
}

/// Normalize numeric columns and return the fitted parameters.
///
/// # Arguments
/// * `df` - Input DataFrame (left untouched)
/// * `columns` - Columns to scale. `None` scales every numeric column.
/// * `method` - Standardization (population std) or min-max scaling
///
/// # Errors
/// Fails with `InvalidArgument` before touching any column if a selected
/// column is not numeric.
pub fn normalize_data(
    df: &DataFrame,
    columns: Option<&[&str]>,
    method: NormalizeMethod,
) -> CleaningResult<(DataFrame, FitParams)> {
    let selected = select_columns(df, columns);
    for name in &selected {
        ensure_numeric(df, name)?;
    }

    let mut out = df.clone();
    let mut params = FitParams::new();

    for name in &selected {
        let column = df.column(name)?;
        let fit = ColumnFit::fit(&present_values(column)?, method);
        if fit.is_degenerate() {
            debug!(column = %name, fit = ?fit, "Degenerate column scaled to zeros");
        }
        out.with_column(fit.transform(column)?)?;
        params.insert(name.as_str(), fit);
    }

    info!(
        operation = "normalize_data",
        columns = ?selected,
        method = %method,
        "Normalized columns"
    );

    Ok((out, params))
}

/// Apply previously fitted parameters to another DataFrame.
///
/// Fitted columns absent from `df` are skipped. A fitted column that is
/// present but not numeric fails with `InvalidArgument`.
pub fn apply_normalization(df: &DataFrame, params: &FitParams) -> CleaningResult<DataFrame> {
    let mut out = df.clone();
    let mut applied: Vec<&str> = Vec::with_capacity(params.len());

    for (name, fit) in params {
        if df.get_column_index(name).is_none() {
            debug!(column = %name, "Fitted column not present, skipping");
            continue;
        }
        ensure_numeric(df, name)?;
        out.with_column(fit.transform(df.column(name)?)?)?;
        applied.push(name.as_str());
    }

    info!(
        operation = "apply_normalization",
        columns = ?applied,
        "Applied fitted normalization"
    );

    Ok(out)
}
