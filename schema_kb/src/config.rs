//! Configuration handling for schema_kb

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Config file picked up from the working directory when none is given explicitly
pub const DEFAULT_CONFIG_FILE: &str = "schema_kb.toml";

/// Load configuration from a TOML file
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    let config_str = fs::read_to_string(path).map_err(|e| {
        Error::ConfigError(format!("Failed to read config file {}: {}", path.display(), e))
    })?;

    let config: Config = toml::from_str(&config_str).map_err(|e| {
        Error::ConfigError(format!("Failed to parse config file {}: {}", path.display(), e))
    })?;

    config.validate()?;
    Ok(config)
}

/// Represents the complete schema_kb configuration
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub output: OutputConfig,
    pub logging: Option<LoggingConfig>,
}

impl Config {
    /// Build a configuration for three explicit paths, everything else defaulted
    pub fn with_paths<S, O, R>(schema: S, output: O, reference: R) -> Self
    where
        S: Into<PathBuf>,
        O: Into<PathBuf>,
        R: Into<PathBuf>,
    {
        Self {
            paths: PathsConfig {
                schema: schema.into(),
                output: output.into(),
                reference: reference.into(),
            },
            ..Self::default()
        }
    }

    /// Reject settings that cannot produce a usable knowledge base
    pub fn validate(&self) -> Result<()> {
        if self.output.indent > MAX_INDENT {
            return Err(Error::ConfigError(format!(
                "output.indent must be at most {}, got {}",
                MAX_INDENT, self.output.indent
            )));
        }

        for (key, path) in [
            ("paths.schema", &self.paths.schema),
            ("paths.reference", &self.paths.reference),
            ("paths.output", &self.paths.output),
        ] {
            if path.as_os_str().is_empty() {
                return Err(Error::ConfigError(format!("{} must not be empty", key)));
            }
        }

        if let Some(logging) = &self.logging {
            match logging.format.to_lowercase().as_str() {
                "text" | "json" => {}
                other => {
                    return Err(Error::ConfigError(format!(
                        "logging.format must be \"text\" or \"json\", got \"{}\"",
                        other
                    )))
                }
            }
        }

        Ok(())
    }
}

const MAX_INDENT: usize = 16;

/// Input and output file locations
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PathsConfig {
    #[serde(default = "default_schema_path")]
    pub schema: PathBuf,
    #[serde(default = "default_reference_path")]
    pub reference: PathBuf,
    #[serde(default = "default_output_path")]
    pub output: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            schema: default_schema_path(),
            reference: default_reference_path(),
            output: default_output_path(),
        }
    }
}

fn default_schema_path() -> PathBuf {
    PathBuf::from("schema.sql")
}

fn default_reference_path() -> PathBuf {
    PathBuf::from("knowledge-base.json")
}

fn default_output_path() -> PathBuf {
    PathBuf::from("knowledge-base-draft-new.json")
}

/// Output generation configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct OutputConfig {
    #[serde(default = "default_indent")]
    pub indent: usize,
    #[serde(default)]
    pub dry_run: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            indent: default_indent(),
            dry_run: false,
        }
    }
}

fn default_indent() -> usize {
    2
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    pub file: Option<String>,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default = "default_console")]
    pub console: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
            format: default_log_format(),
            console: default_console(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_console() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_full_config() {
        let config: Config = toml::from_str(
            r#"
            [paths]
            schema = "kb/schema231.sql"
            reference = "kb/knowledge-base.json"
            output = "kb/knowledge-base-draft-new.json"

            [output]
            indent = 4
            dry_run = true

            [logging]
            level = "debug"
            format = "json"
            console = false
            file = "logs/schema_kb.log"
            "#,
        )
        .unwrap();

        assert_eq!(config.paths.schema, PathBuf::from("kb/schema231.sql"));
        assert_eq!(config.paths.output, PathBuf::from("kb/knowledge-base-draft-new.json"));
        assert_eq!(config.output.indent, 4);
        assert!(config.output.dry_run);

        let logging = config.logging.unwrap();
        assert_eq!(logging.level, "debug");
        assert_eq!(logging.file.as_deref(), Some("logs/schema_kb.log"));
        assert!(!logging.console);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.paths.schema, PathBuf::from("schema.sql"));
        assert_eq!(config.paths.reference, PathBuf::from("knowledge-base.json"));
        assert_eq!(config.output.indent, 2);
        assert!(config.logging.is_none());
    }

    #[test]
    fn test_partial_paths_section() {
        let config: Config = toml::from_str("[paths]\nschema = \"dump.sql\"\n").unwrap();

        assert_eq!(config.paths.schema, PathBuf::from("dump.sql"));
        assert_eq!(config.paths.output, PathBuf::from("knowledge-base-draft-new.json"));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.output.indent = 64;
        assert!(matches!(config.validate(), Err(Error::ConfigError(_))));

        let mut config = Config::with_paths("", "out.json", "ref.json");
        assert!(matches!(config.validate(), Err(Error::ConfigError(_))));

        config.paths.schema = PathBuf::from("schema.sql");
        config.logging = Some(LoggingConfig {
            format: "yaml".to_string(),
            ..LoggingConfig::default()
        });
        assert!(matches!(config.validate(), Err(Error::ConfigError(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_from_file("definitely/not/here.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
