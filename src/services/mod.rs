//! Service layer
//!
//! The service layer holds the portfolio state and the business logic on
//! top of the models: selection, aggregation and report import.

pub mod import;
pub mod portfolio;

pub use import::{ImportReport, ImportService, SkippedRecord};
pub use portfolio::{Portfolio, PortfolioSummary};
