//! Expense identifier
//!
//! Ids are plain positive integers handed out by the manager. Zero and
//! negative values only ever appear transiently, on records read back from
//! malformed lines, and such records are never kept.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Identifier of a single expense record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ExpenseId(i64);

impl ExpenseId {
    /// The placeholder id carried by records that failed to parse
    pub const INVALID: ExpenseId = ExpenseId(0);

    /// The first id handed out for an empty store
    pub const FIRST: ExpenseId = ExpenseId(1);

    /// Wrap a raw integer
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Get the raw integer value
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Whether this id may be persisted (strictly positive)
    pub const fn is_valid(self) -> bool {
        self.0 > 0
    }

    /// The id directly after this one
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<i64> for ExpenseId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl FromStr for ExpenseId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}
