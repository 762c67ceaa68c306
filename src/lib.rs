//! portfolio-cli - Terminal bookkeeping for property projects
//!
//! This library provides the core of a small portfolio manager. Users create
//! new-build or renovation projects, record sales and purchases against them
//! and view per-project and portfolio-wide totals, including an estimate of
//! the VAT refundable on new-build purchases.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Config directory, optional settings file and logging setup
//! - `error`: Custom error types
//! - `models`: Core data models (money, transactions, projects)
//! - `services`: The in-memory portfolio and the report importer
//! - `display`: Text formatting for the terminal
//! - `cli`: The interactive numbered menu
//!
//! All state lives in memory for the life of the process.
//!
//! # Example
//!
//! ```rust
//! use portfolio_cli::models::{Money, ProjectKind, TransactionKind};
//! use portfolio_cli::services::{ImportService, Portfolio};
//!
//! let mut portfolio = Portfolio::new();
//! ImportService::new(&mut portfolio)
//!     .import_str("Riverside,L,P,120.00,Materials")
//!     .unwrap();
//!
//! portfolio.select_project(1).unwrap();
//! portfolio
//!     .add_transaction_to_selected(Money::parse("500").unwrap(), "Deposit", TransactionKind::Sale)
//!     .unwrap();
//!
//! let summary = portfolio.project_summary().unwrap();
//! assert_eq!(summary.kind, ProjectKind::Build);
//! assert_eq!(summary.profit.to_string(), "380.00");
//! assert_eq!(summary.tax_refund.unwrap().to_string(), "20.00");
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;

pub use error::{ImportError, PortfolioError, PortfolioResult};
