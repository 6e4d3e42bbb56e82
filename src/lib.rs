//! cleanframe: tabular data cleaning
//!
//! Three independent, non-mutating steps over polars DataFrames:
//! median imputation, missing-row removal, and standard/min-max scaling
//! with fitted parameters returned to the caller.

pub mod cli;
pub mod logging;
pub mod pipeline;
pub mod report;
pub mod utils;
