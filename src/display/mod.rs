//! Display formatting for terminal output
//!
//! Pure string formatting of expenses and reports; nothing here prints.

pub mod expense;
pub mod report;

pub use expense::{
    format_expense_details, format_expense_list, format_expense_row, format_expense_table,
    format_month_list,
};
pub use report::format_category_totals;
