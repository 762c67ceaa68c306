//! Transaction display formatting
//!
//! Renders a project's transactions as a register table.

use std::fmt::Write;

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::Transaction;

/// Default timestamp format for registers
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

impl TransactionRow {
    fn new(txn: &Transaction, timestamp_format: &str, symbol: &str) -> Self {
        Self {
            kind: txn.kind().to_string(),
            date: format_timestamp(txn, timestamp_format),
            description: txn.description().to_string(),
            amount: txn.amount().format_with_symbol(symbol),
        }
    }
}

/// Render the timestamp, falling back to the default format when
/// `timestamp_format` contains an unknown specifier
fn format_timestamp(txn: &Transaction, timestamp_format: &str) -> String {
    let mut date = String::new();
    if write!(date, "{}", txn.timestamp().format(timestamp_format)).is_err() {
        date = txn.timestamp().format(DEFAULT_TIMESTAMP_FORMAT).to_string();
    }
    date
}

/// Format a project's transactions as a register
pub fn format_transaction_register(
    project_name: &str,
    transactions: &[&Transaction],
    timestamp_format: &str,
    symbol: &str,
) -> String {
    let mut output = format!("List of transactions for {}:\n", project_name);

    if transactions.is_empty() {
        output.push_str("No transactions found.\n");
        return output;
    }

    let rows = transactions
        .iter()
        .map(|txn| TransactionRow::new(txn, timestamp_format, symbol));
    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .with(Modify::new(Columns::last()).with(Alignment::right()));

    output.push_str(&table.to_string());
    output.push('\n');
    output
}
