//! schema_kb: builds a JSON knowledge base from a SQL schema dump
//!
//! Table and column names (plus `COMMENT ON COLUMN` text) are extracted from a
//! `pg_dump`-style schema file and merged with the curated sections of a
//! reference knowledge base: `database_info`, `domainMappings` and `relationships`.

pub mod config;
pub mod error;
pub mod knowledge;
pub mod schema;
pub mod utils;

use std::fs;
use std::path::Path;

// Re-export main types for easier access
pub use config::Config;
pub use error::{Error, Result};
pub use knowledge::{KnowledgeBase, ReferenceKnowledgeBase};
pub use schema::{ExtractionSummary, SchemaExtractor, TableEntry, TableMap};

/// Initialize a generator from the specified configuration file
pub fn init<P: AsRef<Path>>(config_path: P) -> Result<KnowledgeBaseGenerator> {
    let config = config::load_from_file(config_path)?;
    KnowledgeBaseGenerator::new(config)
}

/// Read the schema and reference files, merge them and write the knowledge base to `output_path`
pub fn generate_knowledge_base<S, O, R>(
    sql_path: S,
    output_path: O,
    reference_path: R,
) -> Result<KnowledgeBase>
where
    S: AsRef<Path>,
    O: AsRef<Path>,
    R: AsRef<Path>,
{
    let config = Config::with_paths(
        sql_path.as_ref(),
        output_path.as_ref(),
        reference_path.as_ref(),
    );
    KnowledgeBaseGenerator::new(config)?.run()
}

/// Runs the extract-and-merge workflow for one configuration
pub struct KnowledgeBaseGenerator {
    config: Config,
    extractor: SchemaExtractor,
}

impl KnowledgeBaseGenerator {
    /// Create a new generator from configuration
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let extractor = SchemaExtractor::new()?;

        Ok(Self { config, extractor })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Read both inputs and build the knowledge base in memory
    pub fn build(&self) -> Result<(KnowledgeBase, ExtractionSummary)> {
        let schema_path = &self.config.paths.schema;
        let sql = fs::read_to_string(schema_path).map_err(|e| {
            Error::InputError(format!(
                "Failed to read schema file {}: {}",
                schema_path.display(),
                e
            ))
        })?;

        let reference = ReferenceKnowledgeBase::load(&self.config.paths.reference)?;

        tracing::debug!(
            schema = %schema_path.display(),
            reference = %self.config.paths.reference.display(),
            bytes = sql.len(),
            "Loaded inputs"
        );

        let extracted = self.extractor.extract(&sql);
        let summary = extracted.summary;
        let kb = KnowledgeBase::merge(extracted.into_tables(), &reference);

        Ok((kb, summary))
    }

    /// Build the knowledge base and write it unless this is a dry run
    pub fn run(&self) -> Result<KnowledgeBase> {
        let (kb, _) = self.build()?;

        if self.config.output.dry_run {
            tracing::info!(
                path = %self.config.paths.output.display(),
                "Dry run, knowledge base not written"
            );
            return Ok(kb);
        }

        kb.write_to(&self.config.paths.output, self.config.output.indent)?;
        Ok(kb)
    }

    /// Render a knowledge base with the configured indentation
    pub fn render(&self, kb: &KnowledgeBase) -> Result<String> {
        kb.to_json(self.config.output.indent)
    }
}
