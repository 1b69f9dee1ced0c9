//! Schema module for schema_kb
//!
//! This module extracts tables, columns and column comments from SQL schema dumps.

pub mod extractor;
pub mod types;

// Re-export key types
pub use extractor::SchemaExtractor;
pub use types::{ExtractedSchema, ExtractionSummary, TableEntry, TableMap};
