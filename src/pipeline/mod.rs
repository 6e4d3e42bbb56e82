//! Pipeline module - the cleaning steps and dataset IO

pub mod columns;
pub mod dropna;
pub mod error;
pub mod impute;
pub mod loader;
pub mod missing;
pub mod normalize;
pub mod stats;

pub use columns::*;
pub use dropna::*;
pub use error::*;
pub use impute::*;
pub use loader::*;
pub use missing::*;
pub use normalize::*;
