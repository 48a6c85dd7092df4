//! Read-only expense queries
//!
//! Listing, filtering and lookups. These only borrow the store, so the
//! menu actions that use them never hold it mutably.

use tracing::debug;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Categories, Expense, Metadata};
use crate::storage::Storage;
use crate::validation::parse_date;

/// Expenses matching a filter together with their summed amount
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredExpenses {
    pub expenses: Vec<Expense>,
    pub total: f64,
}

impl FilteredExpenses {
    fn collect<'e>(matches: impl Iterator<Item = &'e Expense>) -> Self {
        let expenses: Vec<Expense> = matches.cloned().collect();
        let total = expenses.iter().map(|e| e.amount).sum();
        Self { expenses, total }
    }

    /// No expense matched
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }
}

/// Queries over the loaded document
#[derive(Debug, Clone, Copy)]
pub struct ExpenseQuery<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseQuery<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Every expense in stored order
    pub fn list_all(&self) -> &'a [Expense] {
        self.storage.expenses()
    }

    /// Expenses whose category equals `category` exactly
    pub fn filter_by_category(&self, category: &str) -> FilteredExpenses {
        let result = FilteredExpenses::collect(
            self.storage
                .expenses()
                .iter()
                .filter(|e| e.category == category),
        );

        debug!(category, matches = result.len(), total = result.total, "Filtered by category");

        result
    }

    /// Expenses recorded on `date`.
    ///
    /// The query must be a valid `YYYY-MM-DD` date. Stored dates are matched
    /// as text, so a record saved as `2024-1-5` is not found by `2024-01-05`.
    pub fn filter_by_date(&self, date: &str) -> ExpenseResult<FilteredExpenses> {
        parse_date(date)?;

        let result =
            FilteredExpenses::collect(self.storage.expenses().iter().filter(|e| e.date == date));

        debug!(date, matches = result.len(), total = result.total, "Filtered by date");

        Ok(result)
    }

    /// The category list in display order
    pub fn list_categories(&self) -> &'a Categories {
        self.storage.categories()
    }

    /// Category at a one-based menu position
    pub fn category_at(&self, choice: usize) -> ExpenseResult<&'a str> {
        choice
            .checked_sub(1)
            .and_then(|position| self.storage.categories().get(position))
            .ok_or_else(|| ExpenseError::category_not_found(format!("selection {}", choice)))
    }

    pub fn metadata(&self) -> &'a Metadata {
        self.storage.metadata()
    }
}
