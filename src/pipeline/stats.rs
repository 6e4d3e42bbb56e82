//! Column statistics over present (non-missing) values

use polars::prelude::*;

/// Collect the present values of a numeric column as `f64`, skipping nulls and NaN.
pub fn present_values(column: &Column) -> PolarsResult<Vec<f64>> {
    let float_col = column.cast(&DataType::Float64)?;
    Ok(float_col
        .f64()?
        .iter()
        .flatten()
        .filter(|v| !v.is_nan())
        .collect())
}

/// Median of the values; `None` when there are none.
///
/// Even-length inputs average the two middle values.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// Minimum and maximum; `(NaN, NaN)` for an empty slice.
pub fn min_max(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (f64::NAN, f64::NAN);
    }
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        })
}

/// Population mean and standard deviation (divisor N).
///
/// A constant column reports its value as the mean and exactly `0.0` as the
/// std, so summation rounding never turns it into a tiny non-zero spread.
pub fn population_mean_std(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (f64::NAN, f64::NAN);
    }

    let (lo, hi) = min_max(values);
    if lo == hi {
        return (lo, 0.0);
    }

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    (mean, variance.sqrt())
}
