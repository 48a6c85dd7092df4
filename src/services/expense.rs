//! Expense service
//!
//! Business logic for recording and deleting expenses on top of the
//! storage layer.

use tracing::{info, warn};

use crate::error::{ExpenseError, ExpenseResult, InvalidField};
use crate::models::{Expense, ExpenseId};
use crate::storage::Storage;
use crate::validation::{capitalize, normalize_category, parse_amount, parse_date};

use super::query::ExpenseQuery;

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a mut Storage,
}

/// Raw input for recording an expense, as typed at the prompts
#[derive(Debug, Clone, Default)]
pub struct CreateExpenseInput {
    pub date: String,
    pub category: String,
    pub description: String,
    pub amount: String,
}

fn reject(field: InvalidField, err: ExpenseError) -> ExpenseError {
    let detail = match err {
        ExpenseError::Validation(detail) => detail,
        other => other.to_string(),
    };
    warn!(%field, %detail, "Rejected expense");
    ExpenseError::InvalidExpense { field, detail }
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Read-only view of the same store
    pub fn query(&self) -> ExpenseQuery<'_> {
        ExpenseQuery::new(&*self.storage)
    }

    /// Validate the input, assign the next id, append and persist.
    ///
    /// Checks run in order date, category, amount. The first failure comes
    /// back as `InvalidExpense` naming that field, and nothing is stored.
    pub fn add_expense(&mut self, input: CreateExpenseInput) -> ExpenseResult<Expense> {
        parse_date(&input.date).map_err(|e| reject(InvalidField::Date, e))?;

        let category = normalize_category(&input.category);
        if !self.storage.categories().contains(&category) {
            return Err(reject(
                InvalidField::Category,
                ExpenseError::Validation(format!("'{}' is not in the category list", category)),
            ));
        }

        let amount = parse_amount(&input.amount).map_err(|e| reject(InvalidField::Amount, e))?;

        let expense = Expense::new(
            self.storage.next_id()?,
            input.date,
            category,
            capitalize(&input.description),
            amount,
        );

        self.storage.append(expense.clone())?;

        info!(id = %expense.id, category = %expense.category, amount = expense.amount, "Recorded expense");

        Ok(expense)
    }

    /// Delete the first expense with `id` and persist
    pub fn remove_expense(&mut self, id: ExpenseId) -> ExpenseResult<Expense> {
        let removed = self
            .storage
            .remove(id)?
            .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))?;

        info!(id = %removed.id, "Deleted expense");

        Ok(removed)
    }
}
