//! Expense Tracker - personal expense tracking from the terminal
//!
//! This library provides the core functionality for a single-user expense
//! tracker. Expenses live in one pipe-delimited flat file that is rewritten
//! in full after every change. Only one process may use a data file at a
//! time; nothing coordinates concurrent writers.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: The expense record and its line format
//! - `storage`: Flat-file load and save
//! - `services`: The expense manager (ids, CRUD, monthly totals)
//! - `display`: Terminal formatting
//! - `cli`: Subcommands and the interactive shell
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `logging`: Tracing setup
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::services::{ExpenseInput, ExpenseManager};
//! use expense_tracker::storage::ExpenseStorage;
//!
//! let mut manager = ExpenseManager::new(ExpenseStorage::new("expenses.db"));
//! manager.add(ExpenseInput::new("2024-03-01", "food", 10.50, "lunch"));
//! let total = manager.total_for_month("2024-03");
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
