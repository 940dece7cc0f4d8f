//! Core data models for the expense tracker
//!
//! This module contains the expense record, its identifier, and the text
//! parsing helpers used to read stored lines.

pub mod expense;
pub mod ids;
pub mod numeric;

pub use expense::Expense;
pub use ids::ExpenseId;
