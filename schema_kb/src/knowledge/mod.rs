//! Knowledge base module for schema_kb
//!
//! This module loads the reference knowledge base and merges it with extracted tables.

pub mod merger;
pub mod reference;

// Re-export key types
pub use merger::KnowledgeBase;
pub use reference::ReferenceKnowledgeBase;
