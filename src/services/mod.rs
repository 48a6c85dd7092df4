//! Service layer for the expense tracker
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation and normalization of user input. Writes go through
//! `ExpenseService`; listing and filtering through `ExpenseQuery`.

pub mod expense;
pub mod query;

pub use expense::{CreateExpenseInput, ExpenseService};
pub use query::{ExpenseQuery, FilteredExpenses};
