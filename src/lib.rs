//! Expense tracker - interactive terminal expense log backed by a JSON file
//!
//! The tracker keeps a single JSON document on disk with a list of
//! categories, the recorded expenses and some descriptive metadata. The
//! document is read once at startup and rewritten in full after every
//! change.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Backing file resolution and session settings
//! - `error`: Custom error types
//! - `models`: Expenses, categories, metadata and the document root
//! - `validation`: Date, amount and text normalization helpers
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `display`: Console formatting
//! - `cli`: Menu loop and handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::TrackerPaths;
//! use expense_tracker::services::ExpenseQuery;
//! use expense_tracker::storage::Storage;
//!
//! let storage = Storage::load(TrackerPaths::new())?;
//! let food = ExpenseQuery::new(&storage).filter_by_category("Food");
//! println!("{} expenses, {} total", food.len(), food.total);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;
pub mod validation;

pub use error::{ExpenseError, ExpenseResult, InvalidField};
