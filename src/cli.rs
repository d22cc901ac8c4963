use anyhow::Context;
use clap::Parser;
use std::io::{Read, Write};
use std::path::PathBuf;
use tracing::info;

use crate::adapters::catalog::{search_data_types, DATA_TYPE_CATEGORIES};
use crate::config::Settings;

/// Generate synthetic JSON records from a field-to-type schema
#[derive(Parser, Debug, Clone)]
#[command(name = "jsonmock", version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file [default: ./jsonmock.{toml,yaml,json}]
    #[arg(short, long, env = "JSONMOCK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Inline schema text, e.g. '{"id": "uuid", "email": "email"}'
    #[arg(short, long, conflicts_with = "schema_file")]
    pub schema: Option<String>,

    /// Read the schema from a file (stdin is used when no schema is given)
    #[arg(short = 'f', long)]
    pub schema_file: Option<PathBuf>,

    /// Number of records to generate
    #[arg(short = 'n', long, env = "JSONMOCK_COUNT", allow_negative_numbers = true)]
    pub count: Option<i64>,

    /// Seed for reproducible output
    #[arg(long, env = "JSONMOCK_SEED")]
    pub seed: Option<u64>,

    /// Write output to this file instead of stdout
    #[arg(short, long, env = "JSONMOCK_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Print the catalog of supported type names and exit
    #[arg(long, conflicts_with = "search")]
    pub list_types: bool,

    /// Print catalog entries whose name or description matches and exit
    #[arg(long)]
    pub search: Option<String>,
}

impl Cli {
    /// Whether this invocation only inspects the catalog
    pub fn is_catalog_query(&self) -> bool {
        self.list_types || self.search.is_some()
    }
}

/// Execute one invocation. The schema falls back to `input` when neither
/// `--schema` nor `--schema-file` is given; data and catalog JSON go to `out`
/// unless an output file is configured.
pub fn run<R: Read, W: Write>(cli: &Cli, input: R, mut out: W) -> anyhow::Result<()> {
    if cli.list_types {
        writeln!(out, "{}", serde_json::to_string_pretty(DATA_TYPE_CATEGORIES)?)?;
        return Ok(());
    }
    if let Some(query) = &cli.search {
        writeln!(out, "{}", serde_json::to_string_pretty(&search_data_types(query))?)?;
        return Ok(());
    }

    let settings = Settings::new_with_cli(cli)?;
    match &cli.config {
        Some(path) => info!("Loaded settings from {}", path.display()),
        None => info!("Loaded settings from ./jsonmock.*"),
    }

    let schema_text = read_schema(cli, input)?;
    let count = cli
        .count
        .unwrap_or(settings.generator.default_count as i64);

    let mut generator = settings.generator.build_generator();
    let output = generator.generate(&schema_text, count)?;

    match &settings.output.path {
        Some(path) => {
            std::fs::write(path, format!("{}\n", output))
                .with_context(|| format!("Failed to write output to {}", path.display()))?;
            info!("Wrote {} records to {}", count, path.display());
        }
        None => writeln!(out, "{}", output)?,
    }

    Ok(())
}

fn read_schema<R: Read>(cli: &Cli, mut input: R) -> anyhow::Result<String> {
    if let Some(schema) = &cli.schema {
        return Ok(schema.clone());
    }
    if let Some(path) = &cli.schema_file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read schema file {}", path.display()));
    }

    let mut schema = String::new();
    input
        .read_to_string(&mut schema)
        .context("Failed to read schema from stdin")?;
    Ok(schema)
}
