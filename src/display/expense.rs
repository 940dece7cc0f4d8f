//! Expense display formatting
//!
//! Renders expenses as a fixed-width register for terminal output.

use crate::models::Expense;

const HEADER: &str = "ID  | Date       | Category   |   Amount | Note";
const RULE: &str = "----+------------+------------+----------+----------------";

/// Format a single expense as a register row (no trailing newline)
pub fn format_expense_row(expense: &Expense) -> String {
    format!(
        "{:>3} | {} | {:<10} | {:>8.2} | {}",
        expense.id, expense.date, expense.category, expense.amount, expense.note
    )
}

/// Format a list of expenses as a register with a header
///
/// Returns an empty string for an empty list; callers choose the message.
pub fn format_expense_table(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return String::new();
    }

    let mut output = String::new();
    output.push_str(HEADER);
    output.push('\n');
    output.push_str(RULE);
    output.push('\n');

    for expense in expenses {
        output.push_str(&format_expense_row(expense));
        output.push('\n');
    }

    output
}

/// Format every expense, or a notice when there are none
pub fn format_expense_list(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        "No expenses recorded.\n".to_string()
    } else {
        format_expense_table(expenses)
    }
}

/// Format the expenses of one month, or a notice when there are none
pub fn format_month_list(year_month: &str, expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        format!("No expenses for {}\n", year_month)
    } else {
        format_expense_table(expenses)
    }
}

/// Format a single expense's details
pub fn format_expense_details(expense: &Expense) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:  {}\n", expense.id));
    output.push_str(&format!("Date:     {}\n", expense.date));
    output.push_str(&format!("Category: {}\n", expense.category));
    output.push_str(&format!("Amount:   {:.2}\n", expense.amount));

    if !expense.note.is_empty() {
        output.push_str(&format!("Note:     {}\n", expense.note));
    }

    output
}
