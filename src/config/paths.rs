//! Path management for the expense tracker
//!
//! ## Path Resolution Order
//!
//! 1. An explicit path passed on the command line (`--file`)
//! 2. `EXPENSE_TRACKER_FILE` environment variable (if set)
//! 3. `expenses.json` in the current working directory

use std::path::{Path, PathBuf};

/// Environment variable that overrides the backing file location
pub const DATA_FILE_ENV: &str = "EXPENSE_TRACKER_FILE";

/// File name used when nothing else is configured
pub const DEFAULT_DATA_FILE: &str = "expenses.json";

/// Manages the paths used by the expense tracker
#[derive(Debug, Clone)]
pub struct TrackerPaths {
    /// The JSON document holding categories, expenses and metadata
    data_file: PathBuf,
}

impl TrackerPaths {
    /// Resolve the backing file from the environment, falling back to
    /// `expenses.json` relative to the working directory
    pub fn new() -> Self {
        let data_file = match std::env::var(DATA_FILE_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => PathBuf::from(DEFAULT_DATA_FILE),
        };

        Self { data_file }
    }

    /// Use an explicit backing file (command line override, tests)
    pub fn with_data_file(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
        }
    }

    /// Get the path to the backing JSON document
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }
}

impl Default for TrackerPaths {
    fn default() -> Self {
        Self::new()
    }
}
