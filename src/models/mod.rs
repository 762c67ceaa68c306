//! Core data models
//!
//! This module contains the data structures of the bookkeeping domain:
//! money amounts, transactions and the projects that own them.

pub mod money;
pub mod project;
pub mod tax;
pub mod transaction;

pub use money::Money;
pub use project::{Project, ProjectKind, ProjectSummary};
pub use tax::{vat_refund, VAT_INCLUSIVE_DIVISOR};
pub use transaction::{Transaction, TransactionFilter, TransactionKind};
