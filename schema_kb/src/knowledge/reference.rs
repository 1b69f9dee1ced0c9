//! Reference knowledge base loading
//!
//! The reference file is hand-written and carries metadata that cannot be
//! extracted from SQL. Its sections are copied opaquely.

use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::error::{Error, Result};

pub const DATABASE_INFO_KEY: &str = "database_info";
pub const DOMAIN_MAPPINGS_KEY: &str = "domainMappings";
pub const RELATIONSHIPS_KEY: &str = "relationships";

/// Top-level sections of a reference knowledge base
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceKnowledgeBase {
    sections: Map<String, Value>,
}

impl ReferenceKnowledgeBase {
    /// Read and parse a reference knowledge base file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::InputError(format!(
                "Failed to read reference knowledge base {}: {}",
                path.display(),
                e
            ))
        })?;

        content.parse::<Self>().map_err(|e| match e {
            Error::SerializationError(msg) => Error::ReferenceError(format!(
                "Failed to parse reference knowledge base {}: {}",
                path.display(),
                msg
            )),
            other => other,
        })
    }

    /// Wrap an already parsed JSON document
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(sections) => Ok(Self { sections }),
            other => Err(Error::ReferenceError(format!(
                "expected a JSON object at the top level, found {}",
                json_type_name(&other)
            ))),
        }
    }

    /// Copy of a top-level section, or an empty object when it is absent
    pub fn section(&self, key: &str) -> Value {
        self.sections
            .get(key)
            .cloned()
            .unwrap_or_else(|| Value::Object(Map::new()))
    }

    pub fn database_info(&self) -> Value {
        self.section(DATABASE_INFO_KEY)
    }

    pub fn domain_mappings(&self) -> Value {
        self.section(DOMAIN_MAPPINGS_KEY)
    }

    pub fn relationships(&self) -> Value {
        self.section(RELATIONSHIPS_KEY)
    }
}

impl FromStr for ReferenceKnowledgeBase {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(s)?;
        Self::from_value(value)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
