use config::{Config, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub mod validator;

use crate::adapters::batch_generator::MockDataGenerator;
use crate::cli::Cli;
use crate::domain::{NonStringTypePolicy, DEFAULT_MAX_COUNT};

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub generator: GeneratorSettings,
    #[serde(default)]
    pub output: OutputSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneratorSettings {
    /// Records generated when no count is requested
    #[serde(default = "default_count")]
    pub default_count: usize,
    /// Largest count a single request may ask for
    #[serde(default = "default_max_count")]
    pub max_count: usize,
    /// Fixed seed for reproducible batches; entropy when unset
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub non_string_types: NonStringTypePolicy,
}

fn default_count() -> usize {
    10
}

fn default_max_count() -> usize {
    DEFAULT_MAX_COUNT
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            default_count: default_count(),
            max_count: default_max_count(),
            seed: None,
            non_string_types: NonStringTypePolicy::default(),
        }
    }
}

impl GeneratorSettings {
    /// Build a batch generator carrying these limits and policy
    pub fn build_generator(&self) -> MockDataGenerator {
        let generator = match self.seed {
            Some(seed) => MockDataGenerator::with_seed(seed),
            None => MockDataGenerator::new(),
        };
        generator
            .max_count(self.max_count)
            .non_string_types(self.non_string_types)
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputSettings {
    /// Destination file; stdout when unset
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl Settings {
    /// Create settings from CLI arguments (includes config file and CLI overrides)
    pub fn new_with_cli(cli: &Cli) -> Result<Self, anyhow::Error> {
        Self::from_root_with_cli(".", cli)
    }

    /// Like [`new_with_cli`](Self::new_with_cli), looking for the default
    /// `jsonmock.{toml,yaml,json}` under `root` when `--config` is unset
    pub fn from_root_with_cli(root: &str, cli: &Cli) -> Result<Self, anyhow::Error> {
        let mut settings = match &cli.config {
            Some(path) => Self::load(File::from(path.as_path()).required(false))?,
            None => Self::load(File::from(Path::new(root).join("jsonmock")).required(false))?,
        };

        // CLI > env vars > config file
        settings.apply_cli_overrides(cli);

        settings.validate()?;
        Ok(settings)
    }

    /// Load `<root>/jsonmock.{toml,yaml,json}` if present
    pub fn from_root(root: &str) -> Result<Self, anyhow::Error> {
        let config_path = Path::new(root).join("jsonmock");
        let settings = Self::load(File::from(config_path).required(false))?;
        settings.validate()?;
        Ok(settings)
    }

    fn load<T>(source: T) -> Result<Self, anyhow::Error>
    where
        T: config::Source + Send + Sync + 'static,
    {
        let s = Config::builder()
            .add_source(source)
            .set_default("generator.default_count", default_count() as i64)?
            .set_default("generator.max_count", default_max_count() as i64)?
            .set_default("generator.non_string_types", "reject")?
            .build()?;

        Ok(s.try_deserialize()?)
    }

    fn apply_cli_overrides(&mut self, cli: &Cli) {
        if let Some(seed) = cli.seed {
            self.generator.seed = Some(seed);
        }
        if let Some(output) = &cli.output {
            self.output.path = Some(output.clone());
        }
    }

    fn validate(&self) -> Result<(), anyhow::Error> {
        validator::ConfigValidator::validate(self).map_err(|errors| {
            let error_messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            anyhow::anyhow!(
                "Configuration validation failed:\n{}",
                error_messages.join("\n")
            )
        })
    }
}
