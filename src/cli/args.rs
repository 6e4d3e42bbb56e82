//! Command-line argument definitions using clap

use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::logging::LogFormat;
use crate::pipeline::{DropHow, NormalizeMethod};

/// cleanframe - impute, drop and scale tabular data
#[derive(Parser, Debug)]
#[command(name = "cleanframe")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Diagnostic log format
    #[arg(long, value_enum, default_value = "pretty", global = true)]
    pub log_format: LogFormat,

    /// Append diagnostic logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

/// Input/output options shared by every subcommand
#[derive(Args, Debug, Clone)]
pub struct IoArgs {
    /// Input file path (CSV or Parquet)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output file path (CSV or Parquet, determined by extension).
    /// Defaults to input directory with '_cleaned' suffix (e.g., data.csv → data_cleaned.csv).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Overwrite an existing output file without asking
    #[arg(long, default_value = "false")]
    pub no_confirm: bool,

    /// Number of rows to use for schema inference (CSV only).
    /// Use 0 for full table scan.
    #[arg(long, default_value = "10000")]
    pub infer_schema_length: usize,
}

impl IoArgs {
    /// Get the output path, deriving from input if not explicitly provided.
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| derive_output_path(&self.input))
    }
}

/// `<dir>/<stem>_cleaned.<ext>` next to the input
pub fn derive_output_path(input: &Path) -> PathBuf {
    let parent = input.parent().unwrap_or_else(|| Path::new("."));
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    let extension = input
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("parquet");
    parent.join(format!("{}_cleaned.{}", stem, extension))
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fill missing numeric values with each column's median
    Impute {
        #[command(flatten)]
        io: IoArgs,

        /// Columns to fill (comma-separated). Defaults to all numeric columns.
        #[arg(long, value_delimiter = ',')]
        columns: Vec<String>,
    },

    /// Drop rows with missing values
    Drop {
        #[command(flatten)]
        io: IoArgs,

        /// "any" drops rows with at least one missing value,
        /// "all" drops rows where every considered value is missing
        #[arg(long, default_value = "any")]
        how: DropHow,

        /// Minimum number of present values required to keep a row (overrides --how)
        #[arg(long)]
        thresh: Option<usize>,

        /// Columns to consider (comma-separated). Defaults to all columns.
        #[arg(long, value_delimiter = ',')]
        subset: Vec<String>,
    },

    /// Scale numeric columns by standardization or min-max
    Normalize {
        #[command(flatten)]
        io: IoArgs,

        /// Columns to scale (comma-separated). Defaults to all numeric columns.
        #[arg(long, value_delimiter = ',')]
        columns: Vec<String>,

        /// Scaling method: "standard" (z-score) or "minmax"
        #[arg(long, default_value = "standard")]
        method: NormalizeMethod,

        /// Print the fitted parameters as JSON on stdout and nothing else
        #[arg(long, default_value = "false")]
        json: bool,
    },
}

impl Commands {
    pub fn io(&self) -> &IoArgs {
        match self {
            Commands::Impute { io, .. }
            | Commands::Drop { io, .. }
            | Commands::Normalize { io, .. } => io,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Commands::Impute { .. } => "impute",
            Commands::Drop { .. } => "drop",
            Commands::Normalize { .. } => "normalize",
        }
    }
}

/// Empty list means "not given"
pub fn optional_columns(columns: &[String]) -> Option<Vec<&str>> {
    if columns.is_empty() {
        None
    } else {
        Some(columns.iter().map(String::as_str).collect())
    }
}
