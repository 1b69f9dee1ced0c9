//! Command-line entry point for schema_kb

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;

use schema_kb::config::{self, Config, LoggingConfig, DEFAULT_CONFIG_FILE};
use schema_kb::utils::logging::init_logging;
use schema_kb::KnowledgeBaseGenerator;

/// Build a JSON knowledge base from a SQL schema dump and a reference knowledge base
#[derive(Parser, Debug)]
#[command(name = "schema_kb")]
#[command(version)]
struct Cli {
    /// TOML config file (defaults to ./schema_kb.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// SQL schema dump to extract tables from
    #[arg(long)]
    schema: Option<PathBuf>,

    /// Reference knowledge base supplying database_info, domainMappings and relationships
    #[arg(long)]
    reference: Option<PathBuf>,

    /// Where to write the generated knowledge base
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the knowledge base to stdout instead of writing it
    #[arg(long)]
    dry_run: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => config::load_from_file(path)?,
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => config::load_from_file(DEFAULT_CONFIG_FILE)?,
        None => Config::default(),
    };

    if let Some(schema) = &cli.schema {
        config.paths.schema = schema.clone();
    }
    if let Some(reference) = &cli.reference {
        config.paths.reference = reference.clone();
    }
    if let Some(output) = &cli.output {
        config.paths.output = output.clone();
    }
    if cli.dry_run {
        config.output.dry_run = true;
    }

    let logging = config.logging.get_or_insert_with(LoggingConfig::default);
    if let Some(level) = &cli.log_level {
        logging.level = level.clone();
    }

    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli).context("Failed to load configuration")?;

    init_logging(&config.logging).context("Failed to initialize logging")?;

    let generator = KnowledgeBaseGenerator::new(config)?;
    let kb = generator
        .run()
        .context("Failed to generate knowledge base")?;

    if generator.config().output.dry_run {
        println!("{}", generator.render(&kb)?);
    }

    Ok(())
}
