//! Project model
//!
//! A project is a property venture that owns an ordered list of transactions.
//! There are exactly two kinds: new builds, which can reclaim VAT on their
//! purchases, and renovations, which cannot.

use std::fmt;

use super::money::Money;
use crate::error::{PortfolioError, PortfolioResult};
use super::tax::vat_refund;
use super::transaction::{Transaction, TransactionFilter};

/// Kind of project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectKind {
    /// New build, eligible for a VAT refund on purchases
    Build,
    /// Renovation, no VAT refund
    Renovation,
}

impl ProjectKind {
    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Build => "New Build",
            Self::Renovation => "Renovation",
        }
    }

    /// Map the report file code. `L` is the code the report software uses
    /// for new builds; `R` is renovation.
    pub fn from_import_code(code: &str) -> Option<Self> {
        match code {
            "L" => Some(Self::Build),
            "R" => Some(Self::Renovation),
            _ => None,
        }
    }

    /// Map the menu prompt choice (1 for new build, 2 for renovation)
    pub fn from_menu_choice(choice: u32) -> Option<Self> {
        match choice {
            1 => Some(Self::Build),
            2 => Some(Self::Renovation),
            _ => None,
        }
    }

    /// Whether purchases on this kind of project count towards the VAT refund
    pub fn is_tax_refundable(&self) -> bool {
        matches!(self, Self::Build)
    }
}

impl fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Totals for one project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSummary {
    pub name: String,
    pub kind: ProjectKind,
    pub sales: Money,
    pub purchases: Money,
    pub profit: Money,
    /// Only present for new builds
    pub tax_refund: Option<Money>,
}

/// A project and the transactions recorded against it
#[derive(Debug, Clone)]
pub struct Project {
    name: String,
    kind: ProjectKind,
    transactions: Vec<Transaction>,
}

impl Project {
    /// Create an empty project
    pub fn new(name: impl Into<String>, kind: ProjectKind) -> Self {
        Self {
            name: name.into(),
            kind,
            transactions: Vec::new(),
        }
    }

    /// Create an empty new-build project
    pub fn build(name: impl Into<String>) -> Self {
        Self::new(name, ProjectKind::Build)
    }

    /// Create an empty renovation project
    pub fn renovation(name: impl Into<String>) -> Self {
        Self::new(name, ProjectKind::Renovation)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ProjectKind {
        self.kind
    }

    /// Label for the project's kind ("New Build" or "Renovation")
    pub fn describe_type(&self) -> &'static str {
        self.kind.label()
    }

    /// Append a transaction, returning a reference to the stored copy
    pub fn add_transaction(&mut self, txn: Transaction) -> &Transaction {
        self.transactions.push(txn);
        &self.transactions[self.transactions.len() - 1]
    }

    /// All transactions in insertion order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    /// Transactions passing `filter`, in insertion order
    ///
    /// The iterator is lazy and can be cloned to walk the sequence again.
    pub fn transactions_matching(
        &self,
        filter: TransactionFilter,
    ) -> impl Iterator<Item = &Transaction> + Clone + '_ {
        self.transactions.iter().filter(move |t| filter.matches(t))
    }

    /// Transactions for which an arbitrary predicate holds
    pub fn transactions_where<'a, P>(
        &'a self,
        predicate: P,
    ) -> impl Iterator<Item = &'a Transaction> + 'a
    where
        P: Fn(&Transaction) -> bool + 'a,
    {
        self.transactions.iter().filter(move |t| predicate(*t))
    }

    /// Sum of the amounts passing `filter`; zero when nothing matches
    pub fn total_amount(&self, filter: TransactionFilter) -> PortfolioResult<Money> {
        Money::checked_sum(self.transactions_matching(filter).map(|t| t.amount()))
            .ok_or(PortfolioError::AmountOverflow)
    }

    /// Sales, purchases, profit and, for new builds, the VAT refund estimate
    pub fn summarize(&self) -> PortfolioResult<ProjectSummary> {
        let sales = self.total_amount(TransactionFilter::sales())?;
        let purchases = self.total_amount(TransactionFilter::purchases())?;
        let profit = sales
            .checked_sub(purchases)
            .ok_or(PortfolioError::AmountOverflow)?;
        let tax_refund = match self.kind {
            ProjectKind::Build => Some(vat_refund(purchases)),
            ProjectKind::Renovation => None,
        };

        Ok(ProjectSummary {
            name: self.name.clone(),
            kind: self.kind,
            sales,
            purchases,
            profit,
            tax_refund,
        })
    }
}
