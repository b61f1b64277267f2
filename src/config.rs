use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

use crate::core::render::{DEFAULT_NAMESPACE, Target, TargetSelection};

pub const CONFIG_FILE_NAME: &str = ".schemeconstrc.json";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_schema_file", alias = "schemeFile")]
    pub schema_file: String,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default = "default_namespace")]
    pub namespace: String,
    #[serde(default)]
    pub target: TargetSelection,
}

fn default_schema_file() -> String {
    "./Scheme.php".to_string()
}

fn default_output_dir() -> String {
    "./Scheme".to_string()
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schema_file: default_schema_file(),
            output_dir: default_output_dir(),
            namespace: default_namespace(),
            target: TargetSelection::default(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Paths must be non-empty. PHP output needs a namespace.
    pub fn validate(&self) -> Result<()> {
        if self.schema_file.trim().is_empty() {
            bail!("'schemaFile' must not be empty");
        }
        if self.output_dir.trim().is_empty() {
            bail!("'outputDir' must not be empty");
        }
        if self.target.includes(Target::Php) && self.namespace.trim().is_empty() {
            bail!("'namespace' must not be empty for php output");
        }
        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Path of the config file, `None` when defaults were used.
    pub source: Option<PathBuf>,
}

/// Load `.schemeconstrc.json` from `dir`, falling back to defaults.
pub fn load_config(dir: &Path) -> Result<ConfigLoadResult> {
    let path = dir.join(CONFIG_FILE_NAME);
    if !path.exists() {
        return Ok(ConfigLoadResult {
            config: Config::default(),
            source: None,
        });
    }

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("Invalid config file: {}", path.display()))?;

    Ok(ConfigLoadResult {
        config,
        source: Some(path),
    })
}
