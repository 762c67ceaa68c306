//! Display formatting for terminal output
//!
//! Provides utilities for formatting data models for terminal display.
//! Every function returns a `String`; printing is left to the caller.

pub mod project;
pub mod report;
pub mod transaction;

pub use project::{format_project_list, format_project_summary};
pub use report::{format_import_report, format_portfolio_summary, separator};
pub use transaction::{format_transaction_register, DEFAULT_TIMESTAMP_FORMAT};
