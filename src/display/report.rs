//! Report formatting utilities for terminal output

use std::collections::BTreeMap;

/// Format the per-category totals of a month followed by the month total
pub fn format_category_totals(
    year_month: &str,
    totals: &BTreeMap<String, f64>,
    month_total: f64,
) -> String {
    if totals.is_empty() {
        return format!("No data for {}\n", year_month);
    }

    let mut output = String::new();
    output.push_str(&format!("Totals for {}:\n", year_month));
    for (category, amount) in totals {
        output.push_str(&format!("{:<12} -> {:.2}\n", category, amount));
    }
    output.push_str(&separator(20));
    output.push('\n');
    output.push_str(&format!("Total -> {:.2}\n", month_total));

    output
}

/// Format a separator line
fn separator(width: usize) -> String {
    "-".repeat(width)
}
