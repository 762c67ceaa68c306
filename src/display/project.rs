//! Project display formatting
//!
//! Provides formatting for the numbered project list and single-project
//! summaries.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Project, ProjectSummary};

#[derive(Tabled)]
struct ProjectRow {
    #[tabled(rename = "#")]
    number: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    kind: &'static str,
    #[tabled(rename = "Transactions")]
    transactions: usize,
}

/// Format the numbered project list
///
/// `selected` is the 1-based number of the selected project, marked with `*`.
pub fn format_project_list(projects: &[Project], selected: Option<usize>) -> String {
    let mut output = String::from("List of projects:\n");

    if projects.is_empty() {
        output.push_str("No projects yet.\n");
        return output;
    }

    let rows = projects.iter().enumerate().map(|(i, p)| {
        let number = i + 1;
        let marker = if selected == Some(number) { "*" } else { "" };
        ProjectRow {
            number: format!("{}{}", number, marker),
            name: p.name().to_string(),
            kind: p.describe_type(),
            transactions: p.transaction_count(),
        }
    });

    let mut table = Table::new(rows);
    table.with(Style::psql());
    output.push_str(&table.to_string());
    output.push('\n');
    output
}

/// Format the summary of a single project
pub fn format_project_summary(summary: &ProjectSummary, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Project Type: {}\n", summary.kind));
    output.push_str(&format!("Summary total for {}:\n", summary.name));
    output.push_str(&format!("Sales:     {}\n", summary.sales.format_with_symbol(symbol)));
    output.push_str(&format!(
        "Purchases: {}\n",
        summary.purchases.format_with_symbol(symbol)
    ));
    output.push_str(&format!("Profits:   {}\n", summary.profit.format_with_symbol(symbol)));

    if let Some(refund) = summary.tax_refund {
        output.push_str(&format!(
            "Expected tax refund: {}\n",
            refund.format_with_symbol(symbol)
        ));
    }

    output
}
