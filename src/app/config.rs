//! `anamalia.toml` loading.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::AppError;

/// Config file looked up in the working directory when `--config` is absent.
pub const CONFIG_FILE: &str = "anamalia.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnamaliaConfig {
    #[serde(default)]
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub batch: BatchConfig,
    #[serde(default)]
    pub assemble: AssembleConfig,
}

/// Where the Tenner dataset comes from. Absent path means the embedded dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatasetConfig {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Directory that receives bundle files.
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { dir: default_output_dir() }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("bundles")
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BatchConfig {
    /// Upper bound on permutations a batch expansion may produce.
    #[serde(default = "default_max_permutations")]
    pub max_permutations: u64,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self { max_permutations: default_max_permutations() }
    }
}

fn default_max_permutations() -> u64 {
    1000
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AssembleConfig {
    /// Compose incomplete single-mode selections as previews.
    #[serde(default)]
    pub allow_partial: bool,
}

impl AnamaliaConfig {
    pub fn parse(content: &str) -> Result<Self, AppError> {
        let config: AnamaliaConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.batch.max_permutations == 0 {
            return Err(AppError::config_error("batch.max_permutations must be greater than 0"));
        }
        if self.output.dir.as_os_str().is_empty() {
            return Err(AppError::config_error("output.dir must not be empty"));
        }
        Ok(())
    }

    /// Load from an explicit path (which must exist) or from `anamalia.toml`
    /// in `root` (which may be absent).
    pub fn load(explicit: Option<&Path>, root: &Path) -> Result<Self, AppError> {
        let (path, required) = match explicit {
            Some(path) => (path.to_path_buf(), true),
            None => (root.join(CONFIG_FILE), false),
        };

        if !path.exists() {
            if required {
                return Err(AppError::config_error(format!("Config file not found: {}", path.display())));
            }
            tracing::debug!(path = %path.display(), "no config file; using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let mut config = Self::parse(&content)
            .map_err(|e| AppError::config_error(format!("Invalid config {}: {}", path.display(), e)))?;

        // Relative paths are resolved against the config file's directory.
        let base = path.parent().unwrap_or(root);
        if let Some(dataset) = config.dataset.path.as_mut() {
            if dataset.is_relative() {
                *dataset = base.join(&*dataset);
            }
        }
        if config.output.dir.is_relative() {
            config.output.dir = base.join(&config.output.dir);
        }
        Ok(config)
    }
}
