//! cleanframe: Data Cleaning CLI Tool
//!
//! Loads a CSV or Parquet dataset, applies one cleaning step
//! (median imputation, missing-row removal, or normalization),
//! and writes the result.

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;

use cleanframe::cli::{confirm_overwrite, optional_columns, Cli, Commands};
use cleanframe::logging::{init_logging, LogConfig};
use cleanframe::pipeline::{
    count_missing_cells, drop_missing, fill_missing_median, is_numeric_column,
    load_dataset_with_progress, normalize_data, save_dataset, select_columns, FitParams,
};
use cleanframe::report::{display_fit_params, fit_params_to_json, CleaningSummary};
use cleanframe::utils::{
    create_spinner, finish_with_success, print_banner, print_completion, print_config,
    print_count, print_info, print_step_header, print_success,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_config = LogConfig::from_verbosity(cli.verbose)
        .with_format(cli.log_format)
        .with_log_file(cli.log_file.clone());
    init_logging(&log_config).context("Failed to initialize logging")?;

    let io = cli.command.io();
    let output_path = io.output_path();
    // --json keeps stdout machine-readable
    let quiet = matches!(cli.command, Commands::Normalize { json: true, .. });

    if !quiet {
        print_banner(env!("CARGO_PKG_VERSION"));
        print_config(
            &io.input,
            &output_path,
            cli.command.name(),
            &command_params(&cli.command),
        );
        print_step_header(1, "Load Dataset");
    }

    // Step 1: Load dataset
    let step_start = Instant::now();
    let (df, rows, cols, memory_mb) = load_dataset_with_progress(&io.input, io.infer_schema_length)?;
    let missing_before = count_missing_cells(&df)?;

    if !quiet {
        println!("\n    {} Dataset Statistics:", style("✧").cyan());
        println!("      Rows: {}", rows);
        println!("      Columns: {}", cols);
        println!("      Missing cells: {}", missing_before);
        println!("      Estimated memory: {:.2} MB", memory_mb);
        print_elapsed(step_start);
        print_step_header(2, step_title(&cli.command));
    }

    // Step 2: Clean
    let step_start = Instant::now();
    let mut summary = CleaningSummary::new(cli.command.name(), rows, missing_before);
    let mut fit_params: Option<FitParams> = None;

    let mut cleaned = match &cli.command {
        Commands::Impute { columns, .. } => {
            let requested = optional_columns(columns);
            let out = fill_missing_median(&df, requested.as_deref())?;
            summary.set_processed_columns(
                select_columns(&df, requested.as_deref())
                    .into_iter()
                    .filter(|name| is_numeric_column(&df, name))
                    .collect(),
            );
            out
        }
        Commands::Drop {
            how, thresh, subset, ..
        } => {
            let requested = optional_columns(subset);
            drop_missing(&df, *how, *thresh, requested.as_deref())?
        }
        Commands::Normalize {
            columns, method, ..
        } => {
            let requested = optional_columns(columns);
            let (out, params) = normalize_data(&df, requested.as_deref(), *method)?;
            summary.set_processed_columns(params.columns());
            fit_params = Some(params);
            out
        }
    };

    summary.set_result(cleaned.height(), count_missing_cells(&cleaned)?);

    if !quiet {
        if summary.processed_columns.is_empty() && !matches!(cli.command, Commands::Drop { .. }) {
            print_info("No matching columns; dataset left unchanged");
        }
        if summary.rows_dropped() > 0 {
            print_count("row(s) dropped", summary.rows_dropped(), None);
        }
        if summary.missing_resolved() > 0 {
            print_count("missing cell(s) resolved", summary.missing_resolved(), None);
        }
        print_success(&format!("{} complete", step_title(&cli.command)));
        print_elapsed(step_start);
    }

    // Step 3: Save output
    if !confirm_overwrite(&output_path, io.no_confirm)? {
        println!("Cancelled by user.");
        return Ok(());
    }

    if !quiet {
        print_step_header(3, "Save Results");
    }
    let step_start = Instant::now();
    let spinner = create_spinner("Writing output file...");
    save_dataset(&mut cleaned, &output_path)?;
    finish_with_success(&spinner, &format!("Saved to {}", output_path.display()));

    if quiet {
        if let Some(params) = &fit_params {
            println!("{}", fit_params_to_json(params)?);
        }
        return Ok(());
    }
    print_elapsed(step_start);

    summary.display();
    if let Some(params) = &fit_params {
        display_fit_params(params);
    }
    print_completion();

    Ok(())
}

fn step_title(command: &Commands) -> &'static str {
    match command {
        Commands::Impute { .. } => "Median Imputation",
        Commands::Drop { .. } => "Drop Missing Rows",
        Commands::Normalize { .. } => "Normalization",
    }
}

fn describe_columns(columns: &[String], default: &str) -> String {
    if columns.is_empty() {
        default.to_string()
    } else {
        columns.join(",")
    }
}

fn command_params(command: &Commands) -> Vec<(&'static str, String)> {
    match command {
        Commands::Impute { columns, .. } => {
            vec![("Columns", describe_columns(columns, "all numeric"))]
        }
        Commands::Drop {
            how, thresh, subset, ..
        } => vec![
            ("How", how.to_string()),
            (
                "Thresh",
                thresh.map_or_else(|| "none".to_string(), |t| t.to_string()),
            ),
            ("Subset", describe_columns(subset, "all columns")),
        ],
        Commands::Normalize {
            columns, method, ..
        } => vec![
            ("Method", method.to_string()),
            ("Columns", describe_columns(columns, "all numeric")),
        ],
    }
}

fn print_elapsed(start: Instant) {
    println!(
        "    {}",
        style(format!("⏱  {:.2}s", start.elapsed().as_secs_f64())).dim()
    );
}
