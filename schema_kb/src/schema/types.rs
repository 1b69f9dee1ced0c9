//! Type definitions for schema objects extracted from a SQL dump

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Extracted tables keyed by name, in order of first definition
pub type TableMap = IndexMap<String, TableEntry>;

/// A table as it appears in the generated knowledge base.
///
/// Only `key_columns` is filled by extraction; the descriptive fields stay
/// empty for curators to complete downstream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableEntry {
    pub description: String,
    pub business_context: String,
    pub common_queries: Vec<String>,
    /// Column name to comment text, in declaration order
    pub key_columns: IndexMap<String, String>,
    pub foreign_keys: Vec<Value>,
}

impl TableEntry {
    /// Create an empty table entry
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a column with an empty comment.
    ///
    /// A repeated name resets its comment but keeps its original position.
    pub fn add_column(&mut self, name: &str) {
        self.key_columns.insert(name.to_string(), String::new());
    }

    /// Attach a comment to an existing column, returning false if the column is unknown
    pub fn set_comment(&mut self, column: &str, comment: String) -> bool {
        match self.key_columns.get_mut(column) {
            Some(slot) => {
                *slot = comment;
                true
            }
            None => false,
        }
    }
}

/// Counters collected while extracting one schema dump
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractionSummary {
    pub tables: usize,
    pub columns: usize,
    pub comments_attached: usize,
    pub comments_dropped: usize,
}

/// Result of running the extractor over a schema dump
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedSchema {
    pub tables: TableMap,
    pub summary: ExtractionSummary,
}

impl ExtractedSchema {
    /// Look up a table by name
    pub fn table(&self, name: &str) -> Option<&TableEntry> {
        self.tables.get(name)
    }

    /// Consume the result, keeping only the tables
    pub fn into_tables(self) -> TableMap {
        self.tables
    }
}
