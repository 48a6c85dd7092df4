//! Input validators
//!
//! Pure functions that turn raw console text into typed values. They never
//! touch the store.

use chrono::NaiveDate;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{ExpenseId, DATE_FORMAT};

/// Parse a `YYYY-MM-DD` date.
///
/// The text must have exactly that shape (zero padded, ten characters) and
/// name a real calendar day, so `2024-1-5`, `2024-13-01` and `2023-02-29`
/// are all rejected.
pub fn parse_date(input: &str) -> ExpenseResult<NaiveDate> {
    let invalid = || ExpenseError::Validation(format!("Invalid date '{}', use YYYY-MM-DD", input));

    let bytes = input.as_bytes();
    let shape_ok = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !shape_ok {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| invalid())
}

/// Parse an amount.
///
/// Surrounding whitespace is ignored; anything `f64` parsing accepts is
/// allowed (sign, decimal point, exponent). Infinity and NaN are refused
/// because JSON cannot hold them.
pub fn parse_amount(input: &str) -> ExpenseResult<f64> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| ExpenseError::Validation(format!("Amount '{}' is not numeric", input)))?;

    if !value.is_finite() {
        return Err(ExpenseError::Validation(format!(
            "Amount '{}' is not a finite number",
            input
        )));
    }

    Ok(value)
}

/// First character uppercased, the rest lowercased
pub fn capitalize(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Normalize a category the way it is stored: trimmed, then capitalized
pub fn normalize_category(input: &str) -> String {
    capitalize(input.trim())
}

/// Parse a transaction id typed at the prompt
pub fn parse_expense_id(input: &str) -> ExpenseResult<ExpenseId> {
    input
        .parse()
        .map_err(|_| ExpenseError::MalformedInput(format!("'{}' is not a transaction id", input.trim())))
}

/// Parse a numbered menu selection
pub fn parse_selection(input: &str) -> ExpenseResult<usize> {
    input
        .trim()
        .parse()
        .map_err(|_| ExpenseError::MalformedInput(format!("'{}' is not a number", input.trim())))
}
