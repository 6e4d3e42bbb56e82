//! Fitted normalization parameters: table display and JSON export

use anyhow::{Context, Result};
use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::pipeline::{ColumnFit, FitParams};

fn format_stat(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else {
        format!("{:.6}", value)
    }
}

/// Build a table with one row per fitted column
pub fn fit_params_table(params: &FitParams) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Column").add_attribute(Attribute::Bold),
        Cell::new("Method").add_attribute(Attribute::Bold),
        Cell::new("Statistics").add_attribute(Attribute::Bold),
    ]);

    for (column, fit) in params {
        let stats = match *fit {
            ColumnFit::Standard { mean, std } => {
                format!("mean={}  std={}", format_stat(mean), format_stat(std))
            }
            ColumnFit::MinMax { min, max } => {
                format!("min={}  max={}", format_stat(min), format_stat(max))
            }
        };
        let stats_cell = if fit.is_degenerate() {
            Cell::new(format!("{} (constant)", stats)).fg(Color::Yellow)
        } else {
            Cell::new(stats)
        };
        table.add_row(vec![
            Cell::new(column),
            Cell::new(fit.method().to_string()),
            stats_cell,
        ]);
    }

    table
}

/// Print the fitted parameters table
pub fn display_fit_params(params: &FitParams) {
    println!();
    println!(
        "    {} {}",
        style("📐").cyan(),
        style("FITTED PARAMETERS").white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
    println!();

    for line in fit_params_table(params).to_string().lines() {
        println!("    {}", line);
    }
}

/// Serialize fitted parameters as pretty JSON keyed by column name
pub fn fit_params_to_json(params: &FitParams) -> Result<String> {
    serde_json::to_string_pretty(params).context("Failed to serialize fitted parameters")
}
