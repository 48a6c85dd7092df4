//! The persisted document
//!
//! One JSON object with `categories`, `expenses` and `metadata` at the top
//! level. Everything the tracker knows lives here.

use serde::{Deserialize, Serialize};

use crate::error::{ExpenseError, ExpenseResult};

use super::category::Categories;
use super::expense::Expense;
use super::ids::ExpenseId;

/// Free-form descriptive information about the data file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub currency: String,
    pub created_by: String,
    pub created_on: String,
    pub last_updated: String,
}

/// Root of the backing file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub categories: Categories,
    pub expenses: Vec<Expense>,
    pub metadata: Metadata,
}

impl Document {
    /// One more than the largest id present, or 1 for an empty list
    ///
    /// Fails once the largest id is `u64::MAX`; ids are never wrapped or reused.
    pub fn next_id(&self) -> ExpenseResult<ExpenseId> {
        match self.expenses.iter().map(|e| e.id).max() {
            None => Ok(ExpenseId::FIRST),
            Some(max) => max.checked_next().ok_or_else(|| {
                ExpenseError::Validation(format!("No expense id left after {}", max))
            }),
        }
    }

    /// Position of the first expense with the given id
    pub fn position_of(&self, id: ExpenseId) -> Option<usize> {
        self.expenses.iter().position(|e| e.id == id)
    }
}
