//! Lenient numeric parsing
//!
//! Stored lines and typed-in amounts are read by taking the longest numeric
//! prefix of the text and ignoring whatever follows, so `"12.50 EUR"` reads
//! as `12.5`. Callers decide what a missing prefix means.

/// Parse the leading integer of `text`.
///
/// Accepts optional leading whitespace, an optional sign, then one or more
/// decimal digits. Returns `None` when there are no digits or the value
/// does not fit in an `i64`.
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return None;
    }

    text[..end].parse().ok()
}

/// Spellings of non-finite values, longest first
const NON_FINITE: [(&str, f64); 3] = [
    ("infinity", f64::INFINITY),
    ("inf", f64::INFINITY),
    ("nan", f64::NAN),
];

/// Parse the leading floating-point number of `text`.
///
/// Accepts optional leading whitespace, then either an optionally signed
/// `inf`, `infinity` or `nan` (any case), or the longest prefix made of
/// signs, digits, a decimal point and an exponent that parses as an `f64`.
/// A numeric prefix too large for an `f64` yields `None`.
pub fn parse_leading_float(text: &str) -> Option<f64> {
    let text = text.trim_start();

    let (sign, unsigned) = match text.as_bytes().first() {
        Some(b'-') => (-1.0, &text[1..]),
        Some(b'+') => (1.0, &text[1..]),
        _ => (1.0, text),
    };
    for (word, value) in NON_FINITE {
        let matches = unsigned
            .as_bytes()
            .get(..word.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(word.as_bytes()));
        if matches {
            return Some(sign * value);
        }
    }

    let candidate_len = text
        .bytes()
        .take_while(|b| matches!(b, b'0'..=b'9' | b'+' | b'-' | b'.' | b'e' | b'E'))
        .count();

    (1..=candidate_len)
        .rev()
        .find_map(|end| text[..end].parse::<f64>().ok())
        .filter(|value| value.is_finite())
}
