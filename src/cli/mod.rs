//! CLI command handlers
//!
//! This module contains the implementation of CLI commands and the
//! interactive shell, bridging user input with the service layer.

pub mod expense;
pub mod shell;

pub use expense::{handle_expense_command, parse_amount, ExpenseCommands};
pub use shell::Shell;
