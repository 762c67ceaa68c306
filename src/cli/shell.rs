//! Interactive menu shell
//!
//! Reads menu choices and prompt answers line by line, runs the matching
//! portfolio operation and prints the result. Errors are printed and the
//! loop carries on; only option 0 or the end of input stops it.

use std::io::{BufRead, Write};
use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use super::menu::{render_menu, MenuOption};
use crate::config::Settings;
use crate::display::{
    format_import_report, format_portfolio_summary, format_project_list, format_project_summary,
    format_transaction_register, separator,
};
use crate::error::{PortfolioError, PortfolioResult};
use crate::models::{Money, ProjectKind, TransactionFilter, TransactionKind};
use crate::services::{ImportService, Portfolio};

/// The interactive driver, generic over its input and output streams
pub struct Shell<R, W> {
    input: R,
    output: W,
    portfolio: Portfolio,
    settings: Settings,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a shell around an empty portfolio
    pub fn new(input: R, output: W, settings: Settings) -> Self {
        Self {
            input,
            output,
            portfolio: Portfolio::new(),
            settings,
        }
    }

    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    /// Consume the shell, returning the output stream
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the menu loop until the user exits or input ends
    pub fn run(&mut self) -> PortfolioResult<()> {
        loop {
            write!(self.output, "{}", render_menu())?;
            let line = match self.ask("Enter menu option: ") {
                Ok(line) => line,
                Err(PortfolioError::EndOfInput) => break,
                Err(e) => return Err(e),
            };

            let option = match MenuOption::parse(&line) {
                Ok(MenuOption::Exit) => break,
                Ok(option) => option,
                Err(e) => {
                    writeln!(self.output, "{}", e)?;
                    writeln!(self.output)?;
                    continue;
                }
            };

            debug!(option = option.number(), "menu option chosen");
            match self.dispatch(option) {
                Ok(()) => {}
                Err(PortfolioError::EndOfInput) => break,
                Err(e @ PortfolioError::Io(_)) => return Err(e),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
            writeln!(self.output)?;
        }

        Ok(())
    }

    /// Run a single menu option
    pub fn dispatch(&mut self, option: MenuOption) -> PortfolioResult<()> {
        match option {
            MenuOption::Exit => Ok(()),
            MenuOption::AddProject => self.add_project(),
            MenuOption::ListProjects => self.list_projects(),
            MenuOption::SelectProject => self.select_project(),
            MenuOption::AddTransaction => self.add_transaction(),
            MenuOption::RemoveProject => self.remove_project(),
            MenuOption::ShowSales => self.show_transactions(TransactionFilter::sales()),
            MenuOption::ShowPurchases => self.show_transactions(TransactionFilter::purchases()),
            MenuOption::ProjectSummary => self.project_summary(),
            MenuOption::PortfolioSummary => self.portfolio_summary(),
            MenuOption::LoadReport => {
                let path = self.ask("Enter file path: ")?;
                self.load_report(Path::new(path.trim()))
            }
        }
    }

    /// Import a report file and print what happened
    pub fn load_report(&mut self, path: &Path) -> PortfolioResult<()> {
        let report = ImportService::new(&mut self.portfolio).import_file(path)?;
        write!(self.output, "{}", format_import_report(&report))?;
        Ok(())
    }

    fn add_project(&mut self) -> PortfolioResult<()> {
        let name = self.ask("Enter project name: ")?;
        let choice = self.ask("Enter project type (1 for new build, 2 for renovation): ")?;
        let kind = ProjectKind::from_menu_choice(parse_number(&choice)?)
            .ok_or_else(|| PortfolioError::invalid_choice("project type", choice.trim()))?;

        self.portfolio.add_project(name, kind);
        writeln!(self.output, "Project added")?;
        Ok(())
    }

    fn list_projects(&mut self) -> PortfolioResult<()> {
        let listing = format_project_list(self.portfolio.projects(), self.portfolio.selected_index());
        write!(self.output, "{}", listing)?;
        Ok(())
    }

    fn select_project(&mut self) -> PortfolioResult<()> {
        self.list_projects()?;
        let answer = self.ask("Enter project number: ")?;
        let project = self.portfolio.select_project(parse_number(&answer)?)?;
        writeln!(self.output, "Project selected: {}", project.name())?;
        Ok(())
    }

    fn add_transaction(&mut self) -> PortfolioResult<()> {
        // Fail before prompting when there is nothing to add to
        self.portfolio.selected_project()?;

        let choice = self.ask("Enter transaction type (1 for sale, 2 for purchase): ")?;
        let kind = TransactionKind::from_menu_choice(parse_number(&choice)?)
            .ok_or_else(|| PortfolioError::invalid_choice("transaction type", choice.trim()))?;
        let amount = Money::parse(&self.ask("Enter transaction amount: ")?)?;
        let description = self.ask("Enter transaction description: ")?;

        self.portfolio
            .add_transaction_to_selected(amount, description, kind)?;
        writeln!(self.output, "Transaction added")?;
        Ok(())
    }

    fn remove_project(&mut self) -> PortfolioResult<()> {
        let removed = self.portfolio.remove_selected()?;
        writeln!(self.output, "Project removed: {}", removed.name())?;
        Ok(())
    }

    fn show_transactions(&mut self, filter: TransactionFilter) -> PortfolioResult<()> {
        let transactions = self.portfolio.display_transactions(filter)?;
        let project = self.portfolio.selected_project()?;
        let register = format_transaction_register(
            project.name(),
            &transactions,
            &self.settings.timestamp_format,
            &self.settings.currency_symbol,
        );
        write!(self.output, "{}", register)?;
        Ok(())
    }

    fn project_summary(&mut self) -> PortfolioResult<()> {
        let summary = self.portfolio.project_summary()?;
        writeln!(self.output, "{}", separator(40))?;
        write!(
            self.output,
            "{}",
            format_project_summary(&summary, &self.settings.currency_symbol)
        )?;
        Ok(())
    }

    fn portfolio_summary(&mut self) -> PortfolioResult<()> {
        let summary = self.portfolio.portfolio_summary()?;
        writeln!(self.output, "{}", separator(40))?;
        write!(
            self.output,
            "{}",
            format_portfolio_summary(&summary, &self.settings.currency_symbol)
        )?;
        Ok(())
    }

    /// Print a prompt and read one line, without its line ending
    fn ask(&mut self, prompt: &str) -> PortfolioResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PortfolioError::EndOfInput);
        }

        let trimmed_len = line.trim_end_matches(&['\r', '\n'][..]).len();
        line.truncate(trimmed_len);
        Ok(line)
    }
}

fn parse_number<T: FromStr>(input: &str) -> PortfolioResult<T> {
    let trimmed = input.trim();
    trimmed
        .parse()
        .map_err(|_| PortfolioError::InvalidNumber(trimmed.to_string()))
}
