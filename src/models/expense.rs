//! Expense model
//!
//! A single recorded expense. Amounts are kept as `f64` exactly as they
//! appear in the JSON document; the sign is not constrained.

use serde::{Deserialize, Serialize};

use super::ids::ExpenseId;

/// Date format accepted at the prompt for new expenses
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A financial transaction record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier within the document
    pub id: ExpenseId,

    /// Day the money was spent, `YYYY-MM-DD`.
    ///
    /// Checked when the expense is entered. Records already in the file are
    /// kept verbatim and compared as text.
    pub date: String,

    /// Category name, capitalized, checked against the category list at creation
    pub category: String,

    /// Free text description, capitalized
    pub description: String,

    /// Amount spent
    pub amount: f64,
}

impl Expense {
    /// Create a new expense record
    pub fn new(
        id: ExpenseId,
        date: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            id,
            date: date.into(),
            category: category.into(),
            description: description.into(),
            amount,
        }
    }
}

/// Render an amount the way the tracker prints numbers.
///
/// Shortest form that reads back to the same value. Plain numbers always
/// carry a fractional part (`12.5`, `40.0`); very large or very small ones
/// use a signed, two digit exponent (`1e+16`, `1.5e-05`).
pub fn format_amount(amount: f64) -> String {
    let debug = format!("{:?}", amount);

    let Some((mantissa, exponent)) = debug.split_once('e') else {
        return debug;
    };

    match exponent.strip_prefix('-') {
        Some(digits) => format!("{}e-{:0>2}", mantissa, digits),
        None => format!("{}e+{:0>2}", mantissa, exponent),
    }
}
