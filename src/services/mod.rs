//! Service layer for the expense tracker
//!
//! The service layer owns the session's expense list on top of the storage
//! layer, handling id assignment, queries and write-through persistence.

pub mod expense;

pub use expense::{ExpenseInput, ExpenseManager};
