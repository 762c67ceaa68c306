//! Report formatting utilities for terminal output
//!
//! Portfolio-wide totals and import results.

use crate::services::{ImportReport, PortfolioSummary};

/// Format the totals across the whole portfolio
pub fn format_portfolio_summary(summary: &PortfolioSummary, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Summary total for portfolio ({} projects):\n",
        summary.project_count
    ));
    output.push_str(&format!("Sales:     {}\n", summary.sales.format_with_symbol(symbol)));
    output.push_str(&format!(
        "Purchases: {}\n",
        summary.purchases.format_with_symbol(symbol)
    ));
    output.push_str(&format!("Profits:   {}\n", summary.profit.format_with_symbol(symbol)));
    output.push_str(&format!(
        "Expected tax refund: {}\n",
        summary.tax_refund.format_with_symbol(symbol)
    ));

    output
}

/// Format the outcome of a report import
pub fn format_import_report(report: &ImportReport) -> String {
    let mut output = String::new();

    for skipped in &report.skipped {
        output.push_str(&format!("Invalid data format: {} ({})\n", skipped.text, skipped.error));
    }

    output.push_str("Data loaded from file\n");
    output.push_str(&format!(
        "  {} transactions imported, {} new projects, {} lines skipped\n",
        report.transactions_imported,
        report.projects_created,
        report.skipped.len()
    ));

    output
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}
