//! Error types for the cleaning primitives.

use polars::prelude::PolarsError;
use thiserror::Error;

/// Errors returned by the cleaning operations.
///
/// Degenerate columns (zero variance or zero range) are not errors; they are
/// zero-filled and can be detected through [`crate::pipeline::ColumnFit::is_degenerate`].
#[derive(Debug, Error)]
pub enum CleaningError {
    /// An argument value is not supported (unknown `how`/`method` string,
    /// non-numeric column handed to the normalizer, ...).
    #[error("Invalid argument '{argument}': {reason}")]
    InvalidArgument {
        /// Name of the offending argument
        argument: &'static str,
        /// Human-readable explanation
        reason: String,
    },

    /// Failure inside polars while reading or rebuilding columns.
    #[error(transparent)]
    Polars(#[from] PolarsError),
}

impl CleaningError {
    pub(crate) fn invalid(argument: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument,
            reason: reason.into(),
        }
    }
}

pub type CleaningResult<T> = std::result::Result<T, CleaningError>;
