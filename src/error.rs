//! Custom error types for the expense tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use std::fmt;

use thiserror::Error;

/// The part of a new expense that failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidField {
    Date,
    Category,
    Amount,
}

impl fmt::Display for InvalidField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date => write!(f, "date"),
            Self::Category => write!(f, "category"),
            Self::Amount => write!(f, "amount"),
        }
    }
}

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// The backing file is missing, unreadable or not a valid expense document
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// Validation errors for user supplied values
    #[error("Validation error: {0}")]
    Validation(String),

    /// A new expense was rejected; `field` names the first bad input
    #[error("Invalid expense {field}: {detail}")]
    InvalidExpense { field: InvalidField, detail: String },

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Input that should have been a number but wasn't
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl ExpenseError {
    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for categories
    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::InvalidExpense { .. })
    }

    /// The rejected field, if this error comes from expense validation
    pub fn invalid_field(&self) -> Option<InvalidField> {
        match self {
            Self::InvalidExpense { field, .. } => Some(*field),
            _ => None,
        }
    }

    /// Errors that must stop the process instead of returning to the menu
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::StorageUnavailable(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ExpenseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;
