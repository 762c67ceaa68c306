//! Interactive command-line driver
//!
//! This module contains the numbered main menu and the shell that maps
//! each option onto the service layer.

pub mod menu;
pub mod shell;

pub use menu::{render_menu, MenuOption};
pub use shell::Shell;
