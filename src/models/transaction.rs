//! Transaction model
//!
//! A single money movement against a project: either a sale or a purchase.
//! Transactions are immutable once created.

use chrono::{DateTime, Local};
use std::fmt;

use super::money::Money;

/// Kind of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    /// Money coming in
    Sale,
    /// Money going out
    Purchase,
}

impl TransactionKind {
    /// Map the report file code (`S` or `P`)
    pub fn from_import_code(code: &str) -> Option<Self> {
        match code {
            "S" => Some(Self::Sale),
            "P" => Some(Self::Purchase),
            _ => None,
        }
    }

    /// Map the menu prompt choice (1 for sale, 2 for purchase)
    pub fn from_menu_choice(choice: u32) -> Option<Self> {
        match choice {
            1 => Some(Self::Sale),
            2 => Some(Self::Purchase),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sale => write!(f, "Sale"),
            Self::Purchase => write!(f, "Purchase"),
        }
    }
}

/// Selects which transactions of a project an operation looks at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransactionFilter {
    #[default]
    All,
    Kind(TransactionKind),
}

impl TransactionFilter {
    /// Only sales
    pub fn sales() -> Self {
        Self::Kind(TransactionKind::Sale)
    }

    /// Only purchases
    pub fn purchases() -> Self {
        Self::Kind(TransactionKind::Purchase)
    }

    /// Check whether a transaction passes this filter
    pub fn matches(&self, txn: &Transaction) -> bool {
        match self {
            Self::All => true,
            Self::Kind(kind) => txn.kind == *kind,
        }
    }
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    timestamp: DateTime<Local>,
    amount: Money,
    description: String,
    kind: TransactionKind,
}

impl Transaction {
    /// Create a new transaction stamped with the current local time
    pub fn new(amount: Money, description: impl Into<String>, kind: TransactionKind) -> Self {
        Self {
            timestamp: Local::now(),
            amount,
            description: description.into(),
            kind,
        }
    }

    /// When the transaction was recorded
    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn is_sale(&self) -> bool {
        self.kind == TransactionKind::Sale
    }

    pub fn is_purchase(&self) -> bool {
        self.kind == TransactionKind::Purchase
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Transaction '{}' {}: {} ({})",
            self.kind,
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.description,
            self.amount
        )
    }
}
