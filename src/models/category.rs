//! Category list
//!
//! Categories are stored on disk as a plain JSON array of names. In memory
//! the ordered list is kept for display, alongside a set for membership
//! checks.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Ordered category names plus a lookup set
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Categories {
    names: Vec<String>,
    index: HashSet<String>,
}

impl Categories {
    /// Build from an ordered list of names
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let index = names.iter().cloned().collect();
        Self { names, index }
    }

    /// Case-sensitive membership check
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains(name)
    }

    /// Category at a zero-based display position
    pub fn get(&self, position: usize) -> Option<&str> {
        self.names.get(position).map(String::as_str)
    }

    /// Names in display order
    pub fn as_slice(&self) -> &[String] {
        &self.names
    }

    /// Iterate names in display order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl PartialEq for Categories {
    fn eq(&self, other: &Self) -> bool {
        self.names == other.names
    }
}

impl From<Vec<String>> for Categories {
    fn from(names: Vec<String>) -> Self {
        Self::new(names)
    }
}

impl From<Categories> for Vec<String> {
    fn from(categories: Categories) -> Self {
        categories.names
    }
}
