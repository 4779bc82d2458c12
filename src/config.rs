//! Configuration for loading a taxonomy, persisted as TOML.
//!
//! ```toml
//! synsets = "data/synsets.txt"
//! hypernyms = "data/hypernyms.txt"
//! log_level = "info"
//! parallel = true
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Where to find the taxonomy files and how to run queries over them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordNetConfig {
    /// Synset file: `id,noun1 noun2 ...,gloss` per line.
    #[serde(default = "default_synsets")]
    pub synsets: PathBuf,
    /// Hypernym file: `id,parent1,parent2,...` per line.
    #[serde(default = "default_hypernyms")]
    pub hypernyms: PathBuf,
    /// Default `tracing` filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Answer bulk vertex-pair queries on the rayon pool.
    #[serde(default = "default_parallel")]
    pub parallel: bool,
}

fn default_synsets() -> PathBuf {
    PathBuf::from("synsets.txt")
}
fn default_hypernyms() -> PathBuf {
    PathBuf::from("hypernyms.txt")
}
fn default_log_level() -> String {
    "warn".into()
}
fn default_parallel() -> bool {
    true
}

impl Default for WordNetConfig {
    fn default() -> Self {
        Self {
            synsets: default_synsets(),
            hypernyms: default_hypernyms(),
            log_level: default_log_level(),
            parallel: default_parallel(),
        }
    }
}

impl WordNetConfig {
    /// Config pointing at the given files, other fields default.
    pub fn with_files(synsets: impl Into<PathBuf>, hypernyms: impl Into<PathBuf>) -> Self {
        Self {
            synsets: synsets.into(),
            hypernyms: hypernyms.into(),
            ..Default::default()
        }
    }

    /// Load from a TOML file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Save to a TOML file, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> ConfigResult<()> {
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::Write {
                path: parent.display().to_string(),
                source: e,
            })?;
        }
        std::fs::write(path, content).map_err(|e| ConfigError::Write {
            path: path.display().to_string(),
            source: e,
        })
    }
}
