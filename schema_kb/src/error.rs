//! Error types for schema_kb

use thiserror::Error;

/// Result type for schema_kb operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for schema_kb
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Input error: {0}")]
    InputError(String),

    #[error("Reference knowledge base error: {0}")]
    ReferenceError(String),

    #[error("Output error: {0}")]
    OutputError(String),

    #[error("Pattern error: {0}")]
    PatternError(String),

    #[error("Logging error: {0}")]
    LoggingError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Convert Serde JSON errors to schema_kb errors
impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::SerializationError(error.to_string())
    }
}

/// Convert TOML deserialization errors to schema_kb errors
impl From<toml::de::Error> for Error {
    fn from(error: toml::de::Error) -> Self {
        Error::ConfigError(error.to_string())
    }
}

/// Convert regex compilation errors to schema_kb errors
impl From<regex::Error> for Error {
    fn from(error: regex::Error) -> Self {
        Error::PatternError(error.to_string())
    }
}
