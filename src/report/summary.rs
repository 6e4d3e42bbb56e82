//! Cleaning summary report generation

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

/// Before/after figures for one cleaning run
#[derive(Debug, Default, Clone)]
pub struct CleaningSummary {
    pub operation: String,
    pub rows_before: usize,
    pub rows_after: usize,
    pub missing_before: usize,
    pub missing_after: usize,
    pub processed_columns: Vec<String>,
}

impl CleaningSummary {
    pub fn new(operation: &str, rows_before: usize, missing_before: usize) -> Self {
        Self {
            operation: operation.to_string(),
            rows_before,
            rows_after: rows_before,
            missing_before,
            missing_after: missing_before,
            ..Default::default()
        }
    }

    pub fn set_result(&mut self, rows_after: usize, missing_after: usize) {
        self.rows_after = rows_after;
        self.missing_after = missing_after;
    }

    pub fn set_processed_columns(&mut self, columns: Vec<String>) {
        self.processed_columns = columns;
    }

    pub fn rows_dropped(&self) -> usize {
        self.rows_before.saturating_sub(self.rows_after)
    }

    pub fn missing_resolved(&self) -> usize {
        self.missing_before.saturating_sub(self.missing_after)
    }

    /// Build the summary table
    pub fn to_table(&self) -> Table {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Before").add_attribute(Attribute::Bold),
            Cell::new("After").add_attribute(Attribute::Bold),
        ]);

        let rows_color = if self.rows_dropped() > 0 {
            Color::Red
        } else {
            Color::White
        };
        table.add_row(vec![
            Cell::new("📏 Rows"),
            Cell::new(self.rows_before),
            Cell::new(self.rows_after).fg(rows_color),
        ]);

        let missing_color = if self.missing_after < self.missing_before {
            Color::Green
        } else {
            Color::White
        };
        table.add_row(vec![
            Cell::new("🕳️  Missing cells"),
            Cell::new(self.missing_before),
            Cell::new(self.missing_after).fg(missing_color),
        ]);

        table
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style(format!("{} SUMMARY", self.operation.to_uppercase()))
                .white()
                .bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        // Indent the table
        for line in self.to_table().to_string().lines() {
            println!("    {}", line);
        }

        if !self.processed_columns.is_empty() {
            println!();
            println!(
                "      {} {}:",
                style("Processed columns").yellow(),
                style(format!("({})", self.processed_columns.len())).dim()
            );
            for column in &self.processed_columns {
                println!("        {} {}", style("•").dim(), column);
            }
        }
    }
}
