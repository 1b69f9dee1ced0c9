//! Knowledge base merging and serialization

use serde::{Deserialize, Serialize};
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::{Error, Result};
use crate::knowledge::reference::ReferenceKnowledgeBase;
use crate::schema::types::TableMap;

/// The generated knowledge base.
///
/// Field order here is the key order of the written JSON document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeBase {
    pub database_info: Value,
    pub tables: TableMap,
    #[serde(rename = "domainMappings")]
    pub domain_mappings: Value,
    pub relationships: Value,
}

impl KnowledgeBase {
    /// Combine extracted tables with the sections of a reference knowledge base
    pub fn merge(tables: TableMap, reference: &ReferenceKnowledgeBase) -> Self {
        Self {
            database_info: reference.database_info(),
            tables,
            domain_mappings: reference.domain_mappings(),
            relationships: reference.relationships(),
        }
    }

    /// Render as pretty-printed JSON using `indent` spaces per level
    pub fn to_json(&self, indent: usize) -> Result<String> {
        let indent = " ".repeat(indent);
        let mut buf = Vec::new();
        let mut serializer =
            Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent.as_bytes()));
        self.serialize(&mut serializer)?;

        String::from_utf8(buf).map_err(|e| Error::SerializationError(e.to_string()))
    }

    /// Write the knowledge base to `path`, replacing any existing file
    pub fn write_to<P: AsRef<Path>>(&self, path: P, indent: usize) -> Result<()> {
        let path = path.as_ref();
        let json = self.to_json(indent)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::OutputError(format!(
                    "Failed to create output directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        fs::write(path, json).map_err(|e| {
            Error::OutputError(format!(
                "Failed to write knowledge base {}: {}",
                path.display(),
                e
            ))
        })?;

        info!(path = %path.display(), tables = self.tables.len(), "Wrote knowledge base");
        Ok(())
    }
}
