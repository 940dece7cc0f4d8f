//! Expense storage backed by a single flat file
//!
//! One serialized record per line, in insertion order, no header.

use std::path::{Path, PathBuf};

use crate::error::ExpenseResult;
use crate::models::Expense;

use super::file_io::{read_lines, write_lines};

/// File name used when no other location is configured
pub const DEFAULT_FILE_NAME: &str = "expenses.db";

/// Reads and writes the full list of expenses to one file
#[derive(Debug, Clone)]
pub struct ExpenseStorage {
    path: PathBuf,
}

impl ExpenseStorage {
    /// Create a storage handle for the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all valid records, in file order
    ///
    /// A missing or unreadable file yields an empty list. Blank lines are
    /// skipped and records whose id is not positive are dropped.
    pub fn load(&self) -> Vec<Expense> {
        let lines = match read_lines(&self.path) {
            Ok(lines) => lines,
            Err(e) => {
                tracing::warn!(error = %e, "could not read data file, starting empty");
                return Vec::new();
            }
        };

        let mut discarded = 0usize;
        let expenses: Vec<Expense> = lines
            .iter()
            .filter(|line| !line.is_empty())
            .map(|line| Expense::from_line(line))
            .filter(|expense| {
                let keep = expense.id.is_valid();
                if !keep {
                    discarded += 1;
                }
                keep
            })
            .collect();

        tracing::debug!(
            path = %self.path.display(),
            loaded = expenses.len(),
            discarded,
            "loaded expenses"
        );
        expenses
    }

    /// Overwrite the backing file with the given records
    pub fn save(&self, expenses: &[Expense]) -> ExpenseResult<()> {
        write_lines(&self.path, expenses.iter().map(Expense::to_line))?;
        tracing::debug!(path = %self.path.display(), count = expenses.len(), "saved expenses");
        Ok(())
    }
}

impl Default for ExpenseStorage {
    fn default() -> Self {
        Self::new(DEFAULT_FILE_NAME)
    }
}
