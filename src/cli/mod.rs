//! CLI module - argument parsing and interactive prompts

mod args;
mod prompts;

pub use args::{derive_output_path, optional_columns, Cli, Commands, IoArgs};
pub use prompts::*;
