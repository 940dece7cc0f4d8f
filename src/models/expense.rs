//! Expense model
//!
//! A single dated, categorized transaction and its one-line text form:
//! `id|date|category|amount|note`, with the amount written to two decimals.

use super::ids::ExpenseId;
use super::numeric::{parse_leading_float, parse_leading_int};

/// Separator between the fields of a stored line
pub const FIELD_DELIMITER: char = '|';

/// Number of fields in a well-formed line
pub const FIELD_COUNT: usize = 5;

/// Length of the `YYYY-MM` prefix used for month matching
pub const YEAR_MONTH_LEN: usize = 7;

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Expense {
    /// Identifier assigned by the manager
    pub id: ExpenseId,

    /// Date as entered, expected as `YYYY-MM-DD`
    pub date: String,

    /// Free-text category label, compared verbatim
    pub category: String,

    /// Amount; negative values are allowed
    pub amount: f64,

    /// Optional free-text note
    pub note: String,
}

impl Expense {
    /// Create a new expense
    pub fn new(
        id: ExpenseId,
        date: impl Into<String>,
        category: impl Into<String>,
        amount: f64,
        note: impl Into<String>,
    ) -> Self {
        Self {
            id,
            date: date.into(),
            category: category.into(),
            amount,
            note: note.into(),
        }
    }

    /// Serialize to a single line (without the trailing newline)
    ///
    /// Only the note is sanitized; the other fields are written verbatim.
    pub fn to_line(&self) -> String {
        format!(
            "{id}{d}{date}{d}{category}{d}{amount:.2}{d}{note}",
            id = self.id,
            date = self.date,
            category = self.category,
            amount = self.amount,
            note = sanitize_note(&self.note),
            d = FIELD_DELIMITER,
        )
    }

    /// Deserialize a stored line
    ///
    /// Never fails. A line with fewer than five fields yields the default
    /// record (id 0). An unparsable id becomes 0 and an unparsable amount
    /// becomes 0.0; fields past the fifth are ignored.
    pub fn from_line(line: &str) -> Self {
        let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
        if fields.len() < FIELD_COUNT {
            return Self::default();
        }

        Self {
            id: parse_leading_int(fields[0])
                .map(ExpenseId::from)
                .unwrap_or(ExpenseId::INVALID),
            date: fields[1].to_string(),
            category: fields[2].to_string(),
            amount: parse_leading_float(fields[3]).unwrap_or(0.0),
            note: fields[4].to_string(),
        }
    }

    /// Whether the date's first seven bytes equal `year_month` exactly
    ///
    /// Dates shorter than seven bytes never match.
    pub fn in_month(&self, year_month: &str) -> bool {
        self.date
            .as_bytes()
            .get(..YEAR_MONTH_LEN)
            .is_some_and(|prefix| prefix == year_month.as_bytes())
    }
}

/// Replace characters that would break the line format with a space
fn sanitize_note(note: &str) -> String {
    note.chars()
        .map(|c| match c {
            '|' | '\n' | '\r' => ' ',
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Expense {
        Expense::new(ExpenseId::new(3), "2024-03-02", "food", 10.5, "lunch")
    }

    #[test]
    fn test_to_line() {
        assert_eq!(sample().to_line(), "3|2024-03-02|food|10.50|lunch");
    }

    #[test]
    fn test_round_trip() {
        let expense = Expense::new(ExpenseId::new(12), "2024-01-31", "Rent ", -950.25, "");
        assert_eq!(Expense::from_line(&expense.to_line()), expense);
        assert_eq!(Expense::from_line(&sample().to_line()), sample());
    }

    #[test]
    fn test_note_sanitization() {
        let mut expense = sample();
        expense.note = "a|b\nc\rd".into();

        let line = expense.to_line();
        assert_eq!(line.split(FIELD_DELIMITER).count(), FIELD_COUNT);
        assert!(!line.contains('\n'));

        let parsed = Expense::from_line(&line);
        assert_eq!(parsed.note, "a b c d");
        assert_eq!(parsed.id, expense.id);
    }

    #[test]
    fn test_too_few_fields_is_invalid() {
        let parsed = Expense::from_line("1|2024-01-01|food|3.00");
        assert_eq!(parsed, Expense::default());
        assert!(!parsed.id.is_valid());
    }

    #[test]
    fn test_bad_numbers_default_to_zero() {
        let parsed = Expense::from_line("x|2024-01-01|food|lots|note");
        assert_eq!(parsed.id, ExpenseId::INVALID);
        assert_eq!(parsed.amount, 0.0);

        let parsed = Expense::from_line("4|2024-01-01|food|lots|note");
        assert_eq!(parsed.id, ExpenseId::new(4));
        assert_eq!(parsed.amount, 0.0);
        assert_eq!(parsed.category, "food");
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let parsed = Expense::from_line("2|2024-01-01|food|1.00|note|extra");
        assert_eq!(parsed.note, "note");
    }

    #[test]
    fn test_in_month() {
        let mut expense = sample();
        assert!(expense.in_month("2024-03"));
        assert!(!expense.in_month("2024-02"));
        assert!(!expense.in_month("2024-3"));

        expense.date = "2024".into();
        assert!(!expense.in_month("2024"));
        assert!(!expense.in_month("2024-03"));

        expense.date = "2024-03".into();
        assert!(expense.in_month("2024-03"));
    }

    #[test]
    fn test_in_month_multibyte_date_does_not_panic() {
        let mut expense = sample();
        expense.date = "2024-0é-01".into();
        assert!(!expense.in_month("2024-03"));
    }
}
