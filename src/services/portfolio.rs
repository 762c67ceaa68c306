//! Portfolio service
//!
//! Holds the ordered list of projects and the currently selected one.
//! Project-scoped operations act on the selection; the portfolio summary
//! always covers every project.

use tracing::{debug, info};

use crate::error::{PortfolioError, PortfolioResult};
use crate::models::{
    vat_refund, Money, Project, ProjectKind, ProjectSummary, Transaction, TransactionFilter,
    TransactionKind,
};

/// Totals across the whole portfolio
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioSummary {
    pub project_count: usize,
    pub sales: Money,
    pub purchases: Money,
    pub profit: Money,
    /// Purchases on new-build projects
    pub tax_refundable: Money,
    pub tax_refund: Money,
}

/// The in-memory collection of projects
///
/// Projects are kept in insertion order, which is also the 1-based
/// numbering shown to the user. The selection is either unset or a valid
/// position in the list.
#[derive(Debug, Default)]
pub struct Portfolio {
    projects: Vec<Project>,
    selected: Option<usize>,
}

impl Portfolio {
    /// Create an empty portfolio with nothing selected
    pub fn new() -> Self {
        Self::default()
    }

    /// Create and append a new project
    pub fn add_project(&mut self, name: impl Into<String>, kind: ProjectKind) -> &Project {
        let project = Project::new(name, kind);
        info!(name = project.name(), kind = %kind, "project added");
        self.projects.push(project);
        &self.projects[self.projects.len() - 1]
    }

    /// Projects paired with their 1-based display number
    pub fn list_projects(&self) -> Vec<(usize, &str)> {
        self.projects
            .iter()
            .enumerate()
            .map(|(i, p)| (i + 1, p.name()))
            .collect()
    }

    /// Select a project by its 1-based display number
    ///
    /// An out-of-range number leaves the current selection untouched.
    pub fn select_project(&mut self, index: usize) -> PortfolioResult<&Project> {
        if index == 0 || index > self.projects.len() {
            debug!(index, count = self.projects.len(), "selection out of range");
            return Err(PortfolioError::InvalidSelection {
                index,
                count: self.projects.len(),
            });
        }

        let position = index - 1;
        self.selected = Some(position);
        let project = &self.projects[position];
        debug!(name = project.name(), "project selected");
        Ok(project)
    }

    /// The selected project
    pub fn selected_project(&self) -> PortfolioResult<&Project> {
        self.selected
            .and_then(|i| self.projects.get(i))
            .ok_or(PortfolioError::NoProjectSelected)
    }

    /// 1-based number of the selected project, if any
    pub fn selected_index(&self) -> Option<usize> {
        self.selected.map(|i| i + 1)
    }

    fn selected_project_mut(&mut self) -> PortfolioResult<&mut Project> {
        self.selected
            .and_then(|i| self.projects.get_mut(i))
            .ok_or(PortfolioError::NoProjectSelected)
    }

    /// Remove the selected project and everything recorded against it
    ///
    /// The selection is cleared afterwards; no other project is selected in
    /// its place.
    pub fn remove_selected(&mut self) -> PortfolioResult<Project> {
        let position = self.selected.ok_or(PortfolioError::NoProjectSelected)?;
        let removed = self.projects.remove(position);
        self.selected = None;
        info!(
            name = removed.name(),
            transactions = removed.transaction_count(),
            "project removed"
        );
        Ok(removed)
    }

    /// Record a transaction against the selected project
    pub fn add_transaction_to_selected(
        &mut self,
        amount: Money,
        description: impl Into<String>,
        kind: TransactionKind,
    ) -> PortfolioResult<&Transaction> {
        let project = self.selected_project_mut()?;
        let txn = Transaction::new(amount, description, kind);
        debug!(project = project.name(), kind = %kind, amount = %amount, "transaction added");
        Ok(project.add_transaction(txn))
    }

    /// Transactions of the selected project that pass `filter`
    pub fn display_transactions(
        &self,
        filter: TransactionFilter,
    ) -> PortfolioResult<Vec<&Transaction>> {
        let project = self.selected_project()?;
        Ok(project.transactions_matching(filter).collect())
    }

    /// Summary of the selected project
    pub fn project_summary(&self) -> PortfolioResult<ProjectSummary> {
        self.selected_project()?.summarize()
    }

    /// Totals across every project, regardless of the selection
    ///
    /// The VAT refund is taken once from the combined new-build purchases
    /// rather than summed from per-project refunds.
    pub fn portfolio_summary(&self) -> PortfolioResult<PortfolioSummary> {
        let mut sales = Money::zero();
        let mut purchases = Money::zero();
        let mut tax_refundable = Money::zero();

        for project in &self.projects {
            let project_sales = project.total_amount(TransactionFilter::sales())?;
            let project_purchases = project.total_amount(TransactionFilter::purchases())?;
            sales = checked(sales.checked_add(project_sales))?;
            purchases = checked(purchases.checked_add(project_purchases))?;
            if project.kind().is_tax_refundable() {
                tax_refundable = checked(tax_refundable.checked_add(project_purchases))?;
            }
        }

        Ok(PortfolioSummary {
            project_count: self.projects.len(),
            sales,
            purchases,
            profit: checked(sales.checked_sub(purchases))?,
            tax_refundable,
            tax_refund: vat_refund(tax_refundable),
        })
    }

    /// All projects in display order
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// First project with exactly this name
    pub fn find_by_name(&self, name: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.name() == name)
    }

    /// First project with exactly this name, creating one of `kind` if none
    /// exists. The flag is true when a project was created.
    ///
    /// An existing project keeps its own kind even if `kind` differs.
    pub fn find_or_create(&mut self, name: &str, kind: ProjectKind) -> (&mut Project, bool) {
        match self.projects.iter().position(|p| p.name() == name) {
            Some(position) => (&mut self.projects[position], false),
            None => {
                debug!(name, kind = %kind, "creating project for import");
                self.projects.push(Project::new(name, kind));
                let last = self.projects.len() - 1;
                (&mut self.projects[last], true)
            }
        }
    }
}

fn checked(total: Option<Money>) -> PortfolioResult<Money> {
    total.ok_or(PortfolioError::AmountOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn money(s: &str) -> Money {
        Money::parse(s).unwrap()
    }

    #[test]
    fn test_add_and_list_projects() {
        let mut portfolio = Portfolio::new();
        assert!(portfolio.is_empty());

        portfolio.add_project("Riverside", ProjectKind::Build);
        portfolio.add_project("Mill", ProjectKind::Renovation);
        portfolio.add_project("Riverside", ProjectKind::Renovation);

        assert_eq!(portfolio.len(), 3);
        assert_eq!(
            portfolio.list_projects(),
            vec![(1, "Riverside"), (2, "Mill"), (3, "Riverside")]
        );
    }

    #[test]
    fn test_select_project() {
        let mut portfolio = Portfolio::new();
        portfolio.add_project("Riverside", ProjectKind::Build);
        portfolio.add_project("Mill", ProjectKind::Renovation);

        let project = portfolio.select_project(2).unwrap();
        assert_eq!(project.name(), "Mill");
        assert_eq!(portfolio.selected_index(), Some(2));
        assert_eq!(portfolio.selected_project().unwrap().name(), "Mill");
    }

    #[test]
    fn test_invalid_selection_keeps_state() {
        let mut portfolio = Portfolio::new();
        portfolio.add_project("Riverside", ProjectKind::Build);
        portfolio.add_project("Mill", ProjectKind::Renovation);

        for index in [0, 3, 100] {
            let err = portfolio.select_project(index).unwrap_err();
            assert!(matches!(err, PortfolioError::InvalidSelection { count: 2, .. }));
            assert_eq!(portfolio.selected_index(), None);
        }

        portfolio.select_project(1).unwrap();
        assert!(portfolio.select_project(3).is_err());
        assert_eq!(portfolio.selected_index(), Some(1));
    }

    #[test]
    fn test_select_on_empty_portfolio() {
        let mut portfolio = Portfolio::new();
        let err = portfolio.select_project(1).unwrap_err();
        assert!(matches!(err, PortfolioError::InvalidSelection { index: 1, count: 0 }));
    }

    #[test]
    fn test_operations_require_selection() {
        let mut portfolio = Portfolio::new();
        portfolio.add_project("Riverside", ProjectKind::Build);

        assert!(portfolio.remove_selected().unwrap_err().is_state());
        assert!(portfolio
            .add_transaction_to_selected(money("1"), "x", TransactionKind::Sale)
            .unwrap_err()
            .is_state());
        assert!(portfolio
            .display_transactions(TransactionFilter::sales())
            .unwrap_err()
            .is_state());
        assert!(portfolio.project_summary().unwrap_err().is_state());
        assert_eq!(portfolio.len(), 1);
    }

    #[test]
    fn test_remove_selected_clears_selection() {
        let mut portfolio = Portfolio::new();
        portfolio.add_project("Riverside", ProjectKind::Build);
        portfolio.add_project("Mill", ProjectKind::Renovation);
        portfolio.select_project(1).unwrap();
        portfolio
            .add_transaction_to_selected(money("500"), "Deposit", TransactionKind::Sale)
            .unwrap();

        let removed = portfolio.remove_selected().unwrap();
        assert_eq!(removed.name(), "Riverside");
        assert_eq!(removed.transaction_count(), 1);
        assert_eq!(portfolio.len(), 1);
        assert_eq!(portfolio.selected_index(), None);
        assert!(portfolio.find_by_name("Riverside").is_none());
        assert!(portfolio.portfolio_summary().unwrap().sales.is_zero());
    }

    #[test]
    fn test_add_transaction_to_selected() {
        let mut portfolio = Portfolio::new();
        portfolio.add_project("Riverside", ProjectKind::Build);
        portfolio.add_project("Mill", ProjectKind::Renovation);
        portfolio.select_project(2).unwrap();

        let txn = portfolio
            .add_transaction_to_selected(money("75.5"), "Paint", TransactionKind::Purchase)
            .unwrap();
        assert_eq!(txn.description(), "Paint");

        assert_eq!(portfolio.projects()[0].transaction_count(), 0);
        assert_eq!(portfolio.projects()[1].transaction_count(), 1);
    }

    #[test]
    fn test_display_transactions_filters_by_kind() {
        let mut portfolio = Portfolio::new();
        portfolio.add_project("Riverside", ProjectKind::Build);
        portfolio.select_project(1).unwrap();
        portfolio
            .add_transaction_to_selected(money("500"), "Deposit", TransactionKind::Sale)
            .unwrap();
        portfolio
            .add_transaction_to_selected(money("200"), "Materials", TransactionKind::Purchase)
            .unwrap();

        let sales = portfolio.display_transactions(TransactionFilter::sales()).unwrap();
        assert_eq!(sales.len(), 1);
        assert_eq!(sales[0].description(), "Deposit");

        let purchases = portfolio
            .display_transactions(TransactionFilter::purchases())
            .unwrap();
        assert_eq!(purchases.len(), 1);
        assert_eq!(purchases[0].description(), "Materials");
    }

    #[test]
    fn test_project_summary() {
        let mut portfolio = Portfolio::new();
        portfolio.add_project("Riverside", ProjectKind::Build);
        portfolio.select_project(1).unwrap();
        portfolio
            .add_transaction_to_selected(money("120.00"), "Materials", TransactionKind::Purchase)
            .unwrap();

        let summary = portfolio.project_summary().unwrap();
        assert_eq!(summary.name, "Riverside");
        assert_eq!(summary.tax_refund, Some(Money::new(dec!(20))));
    }

    #[test]
    fn test_empty_portfolio_summary() {
        let summary = Portfolio::new().portfolio_summary().unwrap();
        assert_eq!(summary.project_count, 0);
        assert!(summary.sales.is_zero());
        assert!(summary.purchases.is_zero());
        assert!(summary.profit.is_zero());
        assert!(summary.tax_refund.is_zero());
    }

    #[test]
    fn test_portfolio_summary_only_refunds_builds() {
        let mut portfolio = Portfolio::new();
        portfolio.add_project("Riverside", ProjectKind::Build);
        portfolio.add_project("Mill", ProjectKind::Renovation);
        portfolio.add_project("Orchard", ProjectKind::Build);

        portfolio.select_project(1).unwrap();
        portfolio
            .add_transaction_to_selected(money("1000"), "Plot sale", TransactionKind::Sale)
            .unwrap();
        portfolio
            .add_transaction_to_selected(money("60"), "Timber", TransactionKind::Purchase)
            .unwrap();
        portfolio.select_project(2).unwrap();
        portfolio
            .add_transaction_to_selected(money("500"), "Kitchen", TransactionKind::Purchase)
            .unwrap();
        portfolio.select_project(3).unwrap();
        portfolio
            .add_transaction_to_selected(money("60"), "Glass", TransactionKind::Purchase)
            .unwrap();

        let summary = portfolio.portfolio_summary().unwrap();
        assert_eq!(summary.project_count, 3);
        assert_eq!(summary.sales, Money::new(dec!(1000)));
        assert_eq!(summary.purchases, Money::new(dec!(620)));
        assert_eq!(summary.profit, Money::new(dec!(380)));
        assert_eq!(summary.tax_refundable, Money::new(dec!(120)));
        assert_eq!(summary.tax_refund, Money::new(dec!(20)));
    }

    #[test]
    fn test_summaries_report_overflow() {
        let mut portfolio = Portfolio::new();
        portfolio.add_project("Riverside", ProjectKind::Build);
        portfolio.add_project("Mill", ProjectKind::Renovation);

        // Each project totals fine on its own; only the portfolio sum overflows
        portfolio.select_project(1).unwrap();
        portfolio
            .add_transaction_to_selected(Money::new(Decimal::MAX), "Estate", TransactionKind::Sale)
            .unwrap();
        portfolio.select_project(2).unwrap();
        portfolio
            .add_transaction_to_selected(money("1"), "Flat", TransactionKind::Sale)
            .unwrap();

        assert!(portfolio.project_summary().is_ok());
        let err = portfolio.portfolio_summary().unwrap_err();
        assert!(matches!(err, PortfolioError::AmountOverflow));
        assert!(err.is_user_input());

        portfolio.select_project(1).unwrap();
        portfolio
            .add_transaction_to_selected(money("1"), "Garage", TransactionKind::Sale)
            .unwrap();
        assert!(matches!(
            portfolio.project_summary(),
            Err(PortfolioError::AmountOverflow)
        ));
    }

    #[test]
    fn test_find_or_create() {
        let mut portfolio = Portfolio::new();
        let (project, created) = portfolio.find_or_create("Riverside", ProjectKind::Build);
        assert!(created);
        assert_eq!(project.kind(), ProjectKind::Build);

        let (project, created) = portfolio.find_or_create("Riverside", ProjectKind::Renovation);
        assert!(!created);
        assert_eq!(project.kind(), ProjectKind::Build);
        assert_eq!(portfolio.len(), 1);
    }

    #[test]
    fn test_portfolios_are_independent() {
        let mut a = Portfolio::new();
        let mut b = Portfolio::new();
        a.add_project("Riverside", ProjectKind::Build);
        b.add_project("Mill", ProjectKind::Renovation);
        a.select_project(1).unwrap();

        assert_eq!(a.selected_index(), Some(1));
        assert_eq!(b.selected_index(), None);
    }
}
