//! Expense manager
//!
//! Owns the in-memory expense list for a session, hands out ids, and writes
//! the whole list back to storage after every change.

use std::collections::BTreeMap;

use crate::models::{Expense, ExpenseId};
use crate::storage::ExpenseStorage;

/// Field values for a new or edited expense
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseInput {
    pub date: String,
    pub category: String,
    pub amount: f64,
    pub note: String,
}

impl ExpenseInput {
    /// Create an input from its four fields
    pub fn new(
        date: impl Into<String>,
        category: impl Into<String>,
        amount: f64,
        note: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            category: category.into(),
            amount,
            note: note.into(),
        }
    }
}

/// Session state: the loaded expenses and the next id to assign
pub struct ExpenseManager {
    storage: ExpenseStorage,
    expenses: Vec<Expense>,
    next_id: ExpenseId,
}

impl ExpenseManager {
    /// Load every expense from storage and derive the next id
    ///
    /// The next id is one past the highest loaded id, or 1 for an empty
    /// store. It is not persisted, so deleting the highest-id record and
    /// restarting hands that id out again.
    pub fn new(storage: ExpenseStorage) -> Self {
        let expenses = storage.load();
        let next_id = expenses
            .iter()
            .map(|e| e.id)
            .max()
            .map_or(ExpenseId::FIRST, ExpenseId::next);

        Self {
            storage,
            expenses,
            next_id,
        }
    }

    /// The storage this manager writes to
    pub fn storage(&self) -> &ExpenseStorage {
        &self.storage
    }

    /// Write the current list to storage, reporting whether it succeeded
    pub fn persist(&self) -> bool {
        match self.storage.save(&self.expenses) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "failed to persist expenses");
                false
            }
        }
    }

    /// Record a new expense and return it
    ///
    /// Inputs are not validated here.
    pub fn add(&mut self, input: ExpenseInput) -> Expense {
        let id = self.next_id;
        self.next_id = id.next();

        let expense = Expense::new(id, input.date, input.category, input.amount, input.note);
        self.expenses.push(expense.clone());
        self.persist();

        tracing::info!(id = %expense.id, "added expense");
        expense
    }

    /// Remove every expense with the given id
    ///
    /// Returns whether anything was removed; storage is only rewritten when
    /// the list changed.
    pub fn remove(&mut self, id: ExpenseId) -> bool {
        let before = self.expenses.len();
        self.expenses.retain(|e| e.id != id);

        if self.expenses.len() < before {
            self.persist();
            tracing::info!(%id, "removed expense");
            true
        } else {
            false
        }
    }

    /// Replace every field except the id of the first expense with `id`
    ///
    /// Returns false, without touching storage, when no expense matches.
    pub fn edit(&mut self, id: ExpenseId, input: ExpenseInput) -> bool {
        let Some(expense) = self.expenses.iter_mut().find(|e| e.id == id) else {
            return false;
        };

        expense.date = input.date;
        expense.category = input.category;
        expense.amount = input.amount;
        expense.note = input.note;

        self.persist();
        tracing::info!(%id, "edited expense");
        true
    }

    /// Look up an expense by id
    pub fn get(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// A copy of every expense, in insertion order
    pub fn list_all(&self) -> Vec<Expense> {
        self.expenses.clone()
    }

    /// Expenses whose date starts with `year_month`, in insertion order
    pub fn find_by_month(&self, year_month: &str) -> Vec<Expense> {
        self.month_iter(year_month).cloned().collect()
    }

    /// Sum of amounts per category for one month
    ///
    /// Categories are grouped by exact string, so `Food` and `food` stay
    /// separate.
    pub fn total_per_category(&self, year_month: &str) -> BTreeMap<String, f64> {
        let mut totals = BTreeMap::new();
        for expense in self.month_iter(year_month) {
            *totals.entry(expense.category.clone()).or_insert(0.0) += expense.amount;
        }
        totals
    }

    /// Sum of amounts for one month; 0.0 when nothing matches
    pub fn total_for_month(&self, year_month: &str) -> f64 {
        self.month_iter(year_month).map(|e| e.amount).sum()
    }

    /// Number of expenses held
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Whether no expenses are held
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    fn month_iter<'a>(&'a self, year_month: &'a str) -> impl Iterator<Item = &'a Expense> + 'a {
        self.expenses.iter().filter(move |e| e.in_month(year_month))
    }
}
