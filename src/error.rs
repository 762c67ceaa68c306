//! Custom error types for the portfolio tool
//!
//! This module defines the error hierarchy using thiserror. Every error is
//! recoverable at the process level: the menu reports it and keeps running.

use std::fmt;

use thiserror::Error;

use crate::models::money::MoneyParseError;

/// The main error type for portfolio operations
#[derive(Error, Debug)]
pub enum PortfolioError {
    /// A menu entry that is not one of the numbered options
    #[error("Invalid option: {0}")]
    InvalidOption(String),

    /// A project number outside the 1-based range of the list
    #[error("Invalid project number: {index} (there are {count} projects)")]
    InvalidSelection { index: usize, count: usize },

    /// Numeric input (amount, index) that could not be parsed
    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    /// A numbered choice prompt answered with something outside its range
    #[error("Invalid {field}: {value}")]
    InvalidChoice { field: &'static str, value: String },

    /// A total that does not fit the decimal range
    #[error("Amount out of range: the total is too large to calculate")]
    AmountOverflow,

    /// An operation that needs a selected project was run without one
    #[error("No project selected")]
    NoProjectSelected,

    /// Report import errors
    #[error("Import error: {0}")]
    Import(#[from] ImportError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Console or file I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Standard input closed while a prompt was waiting
    #[error("Input closed")]
    EndOfInput,
}

impl PortfolioError {
    /// Create an "invalid choice" error for a numbered prompt
    pub fn invalid_choice(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidChoice {
            field,
            value: value.into(),
        }
    }

    /// Check if this error was caused by bad user input
    pub fn is_user_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidOption(_)
                | Self::InvalidSelection { .. }
                | Self::InvalidNumber(_)
                | Self::InvalidChoice { .. }
                | Self::AmountOverflow
        )
    }

    /// Check if this error was caused by missing selection state
    pub fn is_state(&self) -> bool {
        matches!(self, Self::NoProjectSelected)
    }
}

impl From<std::io::Error> for PortfolioError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<MoneyParseError> for PortfolioError {
    fn from(err: MoneyParseError) -> Self {
        match err {
            MoneyParseError::InvalidFormat(value) => Self::InvalidNumber(value),
        }
    }
}

/// Why a single report line was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordFormatReason {
    /// Fewer than the five comma-separated fields a record needs
    MissingFields { found: usize },
    /// Project type code other than `L` or `R`
    UnknownProjectType(String),
    /// Transaction type code other than `S` or `P`
    UnknownTransactionType(String),
}

impl fmt::Display for RecordFormatReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFields { found } => {
                write!(f, "expected at least 5 fields, found {}", found)
            }
            Self::UnknownProjectType(code) => write!(f, "invalid project type: {}", code),
            Self::UnknownTransactionType(code) => write!(f, "invalid transaction type: {}", code),
        }
    }
}

/// Errors raised while loading a report file
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImportError {
    /// The file is missing or could not be read
    #[error("cannot read '{path}': {reason}")]
    FileUnavailable { path: String, reason: String },

    /// One line is malformed; the line is skipped and the import continues
    #[error("line {line}: {reason}")]
    RecordFormat {
        line: usize,
        reason: RecordFormatReason,
    },

    /// An amount could not be parsed; the whole import stops here
    #[error("line {line}: invalid amount '{value}'")]
    AmountParse { line: usize, value: String },
}

impl ImportError {
    /// Whether this error stops the import (as opposed to skipping a line)
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::RecordFormat { .. })
    }
}

/// Result type alias for portfolio operations
pub type PortfolioResult<T> = Result<T, PortfolioError>;
