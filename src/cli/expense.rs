//! Expense CLI commands
//!
//! One-shot subcommands that load the data file, run a single manager
//! operation and print the result.

use chrono::Local;
use clap::Subcommand;

use crate::display::{
    format_category_totals, format_expense_details, format_expense_list, format_month_list,
};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::numeric::parse_leading_float;
use crate::models::ExpenseId;
use crate::services::{ExpenseInput, ExpenseManager};

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// List all expenses in the order they were recorded
    #[command(alias = "ls")]
    List,

    /// Record a new expense
    Add {
        /// Amount (e.g. "12.50"; negative values allowed)
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category label
        #[arg(short, long)]
        category: String,
        /// Date (YYYY-MM-DD); defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Optional note
        #[arg(short, long, default_value = "")]
        note: String,
    },

    /// Remove an expense
    #[command(alias = "rm")]
    Remove {
        /// Expense ID
        id: ExpenseId,
    },

    /// Edit an expense; omitted fields keep their current value
    Edit {
        /// Expense ID
        id: ExpenseId,
        /// New date
        #[arg(short, long)]
        date: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New amount
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,
        /// New note
        #[arg(short, long)]
        note: Option<String>,
    },

    /// List the expenses of one month
    Month {
        /// Year and month (YYYY-MM)
        year_month: String,
    },

    /// Show totals per category for one month
    Report {
        /// Year and month (YYYY-MM); defaults to the current month
        year_month: Option<String>,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    manager: &mut ExpenseManager,
    cmd: ExpenseCommands,
) -> ExpenseResult<()> {
    match cmd {
        ExpenseCommands::List => {
            print!("{}", format_expense_list(&manager.list_all()));
        }

        ExpenseCommands::Add {
            amount,
            category,
            date,
            note,
        } => {
            let amount = parse_amount(&amount)?;
            let date = date.unwrap_or_else(today);

            let expense = manager.add(ExpenseInput::new(date, category, amount, note));
            println!("Added expense id={}", expense.id);
        }

        ExpenseCommands::Remove { id } => {
            if !manager.remove(id) {
                return Err(ExpenseError::expense_not_found(id.to_string()));
            }
            println!("Removed expense {}", id);
        }

        ExpenseCommands::Edit {
            id,
            date,
            category,
            amount,
            note,
        } => {
            let current = manager
                .get(id)
                .cloned()
                .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))?;

            let amount = match amount {
                Some(text) => parse_amount(&text)?,
                None => current.amount,
            };
            let input = ExpenseInput {
                date: date.unwrap_or(current.date),
                category: category.unwrap_or(current.category),
                amount,
                note: note.unwrap_or(current.note),
            };

            if !manager.edit(id, input) {
                return Err(ExpenseError::expense_not_found(id.to_string()));
            }
            if let Some(updated) = manager.get(id) {
                println!("Edited expense:");
                print!("{}", format_expense_details(updated));
            }
        }

        ExpenseCommands::Month { year_month } => {
            print!(
                "{}",
                format_month_list(&year_month, &manager.find_by_month(&year_month))
            );
        }

        ExpenseCommands::Report { year_month } => {
            let year_month = year_month.unwrap_or_else(current_month);
            let totals = manager.total_per_category(&year_month);
            let total = manager.total_for_month(&year_month);
            print!("{}", format_category_totals(&year_month, &totals, total));
        }
    }

    Ok(())
}

/// Parse a user-entered amount, accepting trailing text after the number
pub fn parse_amount(text: &str) -> ExpenseResult<f64> {
    parse_leading_float(text)
        .ok_or_else(|| ExpenseError::Validation(format!("Invalid amount: '{}'", text)))
}

/// Today's date as `YYYY-MM-DD`
pub fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// The current month as `YYYY-MM`
pub fn current_month() -> String {
    Local::now().format("%Y-%m").to_string()
}
