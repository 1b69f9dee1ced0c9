//! Utilities for schema_kb
//!
//! This module provides helpers used across the library.

pub mod logging;
pub mod sql_text;

// Re-export key utility functions
pub use logging::{init_logging, parse_level};
pub use sql_text::unescape_string_literal;
