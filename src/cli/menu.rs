//! Main menu options
//!
//! The numbered options of the interactive menu and their parsing.

use crate::error::{PortfolioError, PortfolioResult};

/// One entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Exit,
    AddProject,
    ListProjects,
    SelectProject,
    AddTransaction,
    RemoveProject,
    ShowSales,
    ShowPurchases,
    ProjectSummary,
    PortfolioSummary,
    LoadReport,
}

impl MenuOption {
    /// Options in the order they are listed, with `Exit` last
    pub const ALL: [MenuOption; 11] = [
        MenuOption::AddProject,
        MenuOption::ListProjects,
        MenuOption::SelectProject,
        MenuOption::AddTransaction,
        MenuOption::RemoveProject,
        MenuOption::ShowSales,
        MenuOption::ShowPurchases,
        MenuOption::ProjectSummary,
        MenuOption::PortfolioSummary,
        MenuOption::LoadReport,
        MenuOption::Exit,
    ];

    /// Parse a menu entry; anything but the numbers 0-10 is invalid
    pub fn parse(input: &str) -> PortfolioResult<Self> {
        let trimmed = input.trim();
        let number: u8 = trimmed
            .parse()
            .map_err(|_| PortfolioError::InvalidOption(trimmed.to_string()))?;

        Self::ALL
            .iter()
            .copied()
            .find(|option| option.number() == number)
            .ok_or_else(|| PortfolioError::InvalidOption(trimmed.to_string()))
    }

    /// The number typed to choose this option
    pub fn number(&self) -> u8 {
        match self {
            Self::Exit => 0,
            Self::AddProject => 1,
            Self::ListProjects => 2,
            Self::SelectProject => 3,
            Self::AddTransaction => 4,
            Self::RemoveProject => 5,
            Self::ShowSales => 6,
            Self::ShowPurchases => 7,
            Self::ProjectSummary => 8,
            Self::PortfolioSummary => 9,
            Self::LoadReport => 10,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Exit => "Exit",
            Self::AddProject => "Add a project",
            Self::ListProjects => "Show list of existing projects",
            Self::SelectProject => "Select a project",
            Self::AddTransaction => "Add a transaction to the selected project",
            Self::RemoveProject => "Remove the selected project",
            Self::ShowSales => "Display all sales transactions for the selected project",
            Self::ShowPurchases => "Display all purchase transactions for the selected project",
            Self::ProjectSummary => "Display summary total for the selected project",
            Self::PortfolioSummary => "Display summary total for the entire portfolio",
            Self::LoadReport => "Load data from a report file",
        }
    }
}

/// Render the full menu text
pub fn render_menu() -> String {
    let mut output = String::from("Portfolio Management System\n");
    for option in MenuOption::ALL {
        output.push_str(&format!("{}. {}\n", option.number(), option.label()));
    }
    output
}
