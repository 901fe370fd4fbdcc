//! Shell configuration
//!
//! Loaded from a TOML file by the binary; every field has a default so an
//! empty file (or no file) gives the stock shell.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Name of the root directory, shown as the first path token.
    pub root_name: String,
    /// Appended to the current path to form the prompt.
    pub prompt_suffix: String,
    /// Shell name used in "command not found" messages.
    pub shell_name: String,
    /// Keep at most this many history entries; unlimited when unset.
    pub history_limit: Option<usize>,
    /// Default log filter when `VSHELL_LOG` is not set.
    pub log_level: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            root_name: "~".to_string(),
            prompt_suffix: " $ ".to_string(),
            shell_name: "zsh".to_string(),
            history_limit: None,
            log_level: "warn".to_string(),
        }
    }
}

impl ShellConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }
}
