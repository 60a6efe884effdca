use std::path::{Path, PathBuf};

use cura_transform::KeyCase;
use cura_types::PLACEHOLDER;
use serde::Deserialize;
use thiserror::Error;

/// File looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "cura.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid config value: {0}")]
    Invalid(String),
}

/// Settings shared by every subcommand.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Token that marks "no constraint" in an order list.
    pub placeholder: String,
    /// Case used by `keys` when `--case` is omitted.
    pub key_case: KeyCase,
    /// Entry count used by `top` when `-n` is omitted.
    pub top_n: usize,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            placeholder: PLACEHOLDER.to_string(),
            key_case: KeyCase::Camel,
            top_n: 10,
        }
    }
}

impl CliConfig {
    /// Load from `path`, else from [`DEFAULT_CONFIG_FILE`] if it exists, else
    /// defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.is_file() {
                    Self::from_file(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.placeholder.is_empty() {
            return Err(ConfigError::Invalid("placeholder must not be empty".into()));
        }
        Ok(())
    }
}
