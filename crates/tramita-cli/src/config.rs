//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tramita_pipeline::PipelineConfig;

/// Default configuration file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "tramita.toml";

/// CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base path for the artifact stores (`pdf/` and `md/` subtrees)
    #[serde(default = "default_storage_root")]
    pub storage_root: PathBuf,

    /// Directory for per-run dataset files
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Gemini model used for enrichment
    #[serde(default = "default_gemini_model")]
    pub gemini_model: String,

    /// Pipeline tunables
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

impl Config {
    /// Load configuration from a file, or defaults when none exists.
    ///
    /// An explicitly given path must exist; the implicit default path is
    /// optional. The loaded pipeline section is validated immediately so a
    /// bad configuration fails before any work starts.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => {
                let contents = fs::read_to_string(path).map_err(|e| {
                    CliError::Config(format!("cannot read {}: {}", path.display(), e))
                })?;
                toml::from_str(&contents)?
            }
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    let contents = fs::read_to_string(default)?;
                    toml::from_str(&contents)?
                } else {
                    Self::default()
                }
            }
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        self.pipeline.validate().map_err(CliError::Config)?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_root: default_storage_root(),
            output_dir: default_output_dir(),
            gemini_model: default_gemini_model(),
            pipeline: PipelineConfig::default(),
        }
    }
}

fn default_storage_root() -> PathBuf {
    PathBuf::from("storage/downloads")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}

fn default_gemini_model() -> String {
    "gemini-1.5-flash".to_string()
}
