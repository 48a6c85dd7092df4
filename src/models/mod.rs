//! Core data models for the expense tracker
//!
//! This module contains the data structures persisted in the backing file:
//! expenses, the category list and the document metadata.

pub mod category;
pub mod document;
pub mod expense;
pub mod ids;

pub use category::Categories;
pub use document::{Document, Metadata};
pub use expense::{format_amount, Expense, DATE_FORMAT};
pub use ids::ExpenseId;
