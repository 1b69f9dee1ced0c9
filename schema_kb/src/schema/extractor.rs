//! Schema dump extractor
//!
//! Pulls table names, column names and column comments out of a SQL schema
//! dump. Recognizes only `CREATE TABLE public.<name> (` blocks and
//! `COMMENT ON COLUMN` statements; everything else is skipped.

use regex::Regex;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::schema::types::{ExtractedSchema, TableEntry, TableMap};
use crate::utils::sql_text::unescape_string_literal;

const CREATE_TABLE_PREFIX: &str = "CREATE TABLE";
const CLOSING_PREFIX: char = ')';

const TABLE_NAME_PATTERN: &str = r"CREATE TABLE public\.(\w+)";
const COLUMN_NAME_PATTERN: &str = r"^\w+";
const COLUMN_COMMENT_PATTERN: &str = r"(?s)COMMENT ON COLUMN public\.(\w+)\.(\w+) IS '(.*?)';";

/// Where the line scan currently is
#[derive(Debug, Clone, PartialEq, Eq)]
enum ScanState {
    Outside,
    /// Inside a `CREATE TABLE` block; `None` when no `public` table has been named yet
    Inside(Option<String>),
}

/// Extracts tables and column comments from SQL schema text
#[derive(Debug, Clone)]
pub struct SchemaExtractor {
    table_name: Regex,
    column_name: Regex,
    column_comment: Regex,
}

impl SchemaExtractor {
    /// Create a new extractor
    pub fn new() -> Result<Self> {
        Ok(Self {
            table_name: Regex::new(TABLE_NAME_PATTERN)?,
            column_name: Regex::new(COLUMN_NAME_PATTERN)?,
            column_comment: Regex::new(COLUMN_COMMENT_PATTERN)?,
        })
    }

    /// Run both passes over the schema text
    pub fn extract(&self, sql: &str) -> ExtractedSchema {
        let mut schema = ExtractedSchema::default();

        self.scan_tables(sql, &mut schema.tables);
        let (attached, dropped) = self.apply_comments(sql, &mut schema.tables);

        schema.summary.tables = schema.tables.len();
        schema.summary.columns = schema.tables.values().map(|t| t.key_columns.len()).sum();
        schema.summary.comments_attached = attached;
        schema.summary.comments_dropped = dropped;

        info!(
            tables = schema.summary.tables,
            columns = schema.summary.columns,
            comments_attached = attached,
            comments_dropped = dropped,
            "Extracted schema"
        );

        schema
    }

    /// First pass: find table blocks and the columns declared in them
    fn scan_tables(&self, sql: &str, tables: &mut TableMap) {
        let mut state = ScanState::Outside;

        for line in sql.lines() {
            let line = line.trim();

            if line.starts_with(CREATE_TABLE_PREFIX) {
                let name = self
                    .table_name
                    .captures(line)
                    .map(|caps| caps[1].to_string());

                match &name {
                    Some(name) => {
                        if tables.insert(name.clone(), TableEntry::new()).is_some() {
                            debug!(table = %name, "Table defined again, replacing earlier definition");
                        } else {
                            debug!(table = %name, "Found table");
                        }
                    }
                    None => warn!(line, "CREATE TABLE without a public table name"),
                }

                // An unnamed header leaves the table being collected, if any, current
                let current = match std::mem::replace(&mut state, ScanState::Outside) {
                    ScanState::Inside(table) => table,
                    ScanState::Outside => None,
                };
                state = ScanState::Inside(name.or(current));
                continue;
            }

            if state == ScanState::Outside {
                continue;
            }

            if line.starts_with(CLOSING_PREFIX) {
                state = ScanState::Outside;
                continue;
            }

            if let ScanState::Inside(Some(table)) = &state {
                if let Some(column) = self.column_name.find(line) {
                    if let Some(entry) = tables.get_mut(table) {
                        entry.add_column(column.as_str());
                    }
                }
            }
        }
    }

    /// Second pass: attach `COMMENT ON COLUMN` text to known columns.
    ///
    /// Returns how many comments were attached and how many were dropped.
    fn apply_comments(&self, sql: &str, tables: &mut TableMap) -> (usize, usize) {
        let mut attached = 0;
        let mut dropped = 0;

        for caps in self.column_comment.captures_iter(sql) {
            let table = &caps[1];
            let column = &caps[2];
            let comment = unescape_string_literal(&caps[3]);

            let applied = tables
                .get_mut(table)
                .map_or(false, |entry| entry.set_comment(column, comment));

            if applied {
                attached += 1;
            } else {
                dropped += 1;
                debug!(table, column, "Dropping comment for unknown column");
            }
        }

        (attached, dropped)
    }
}
