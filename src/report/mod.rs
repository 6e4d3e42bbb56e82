//! Report module - summarizing cleaning results

pub mod fit_params;
pub mod summary;

pub use fit_params::*;
pub use summary::*;
