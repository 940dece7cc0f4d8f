//! Storage layer for the expense tracker
//!
//! Persists the full expense list to a pipe-delimited flat file, rewriting
//! it completely on every save.

pub mod expenses;
pub mod file_io;

pub use expenses::{ExpenseStorage, DEFAULT_FILE_NAME};
pub use file_io::{read_lines, write_lines};
