//! Storage layer for the expense tracker
//!
//! The whole document is read once at startup and written back in full
//! after every mutation.

pub mod file_io;

pub use file_io::{read_json_required, write_json_atomic};

use tracing::{debug, info};

use crate::config::paths::TrackerPaths;
use crate::error::ExpenseResult;
use crate::models::{Categories, Document, Expense, ExpenseId, Metadata};

/// Owns the in-memory document and its backing file
#[derive(Debug)]
pub struct Storage {
    paths: TrackerPaths,
    document: Document,
}

impl Storage {
    /// Load the document from the configured backing file
    ///
    /// A missing or malformed file yields `StorageUnavailable`.
    pub fn load(paths: TrackerPaths) -> ExpenseResult<Self> {
        let document: Document = read_json_required(paths.data_file())?;

        info!(
            path = %paths.data_file().display(),
            categories = document.categories.len(),
            expenses = document.expenses.len(),
            "Loaded expense document"
        );

        Ok(Self { paths, document })
    }

    /// Wrap an existing document without touching disk
    pub fn with_document(paths: TrackerPaths, document: Document) -> Self {
        Self { paths, document }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.document.expenses
    }

    pub fn categories(&self) -> &Categories {
        &self.document.categories
    }

    pub fn metadata(&self) -> &Metadata {
        &self.document.metadata
    }

    /// Id the next inserted expense will receive
    pub fn next_id(&self) -> ExpenseResult<ExpenseId> {
        self.document.next_id()
    }

    /// Serialize the whole document over the backing file
    pub fn persist(&self) -> ExpenseResult<()> {
        write_json_atomic(self.paths.data_file(), &self.document)?;
        debug!(
            path = %self.paths.data_file().display(),
            expenses = self.document.expenses.len(),
            "Persisted expense document"
        );
        Ok(())
    }

    /// Append an expense and persist. The append is undone if the write fails.
    pub fn append(&mut self, expense: Expense) -> ExpenseResult<()> {
        self.document.expenses.push(expense);

        if let Err(e) = self.persist() {
            self.document.expenses.pop();
            return Err(e);
        }

        Ok(())
    }

    /// Remove the first expense with `id` and persist.
    ///
    /// Returns `Ok(None)` when no such expense exists. The removal is undone
    /// if the write fails.
    pub fn remove(&mut self, id: ExpenseId) -> ExpenseResult<Option<Expense>> {
        let Some(position) = self.document.position_of(id) else {
            return Ok(None);
        };

        let removed = self.document.expenses.remove(position);

        if let Err(e) = self.persist() {
            self.document.expenses.insert(position, removed);
            return Err(e);
        }

        Ok(Some(removed))
    }
}
