use indexmap::IndexMap;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::range::error::VersError;
use crate::range::registry::SchemeRegistry;
use crate::schemes::{LexicographicScheme, builtin_registry};

/// Errors raised while loading the configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file '{path}': {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid alias '{alias}': {source}")]
    Alias {
        alias: String,
        #[source]
        source: VersError,
    },
}

/// vers configuration structure
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct VersConfig {
    pub unknown_scheme: UnknownSchemePolicy,
    /// Alias id -> registered scheme id, applied in file order
    pub aliases: IndexMap<String, String>,
    pub log: LogConfig,
}

/// What to do with a scheme id no scheme is registered for
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UnknownSchemePolicy {
    #[default]
    Reject,
    Lexicographic,
}

/// Logging-related configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct LogConfig {
    /// Default filter directive, overridden by `RUST_LOG`
    pub level: String,
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json: false,
        }
    }
}

impl VersConfig {
    /// Load the configuration at `path`; a missing file yields the defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No config file at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        serde_json::from_str(&content).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Bundled schemes plus the configured aliases and fallback
    pub fn build_registry(&self) -> Result<SchemeRegistry, ConfigError> {
        let mut registry = builtin_registry();

        for (alias, target) in &self.aliases {
            registry
                .alias(alias, target)
                .map_err(|source| ConfigError::Alias {
                    alias: alias.clone(),
                    source,
                })?;
        }

        if self.unknown_scheme == UnknownSchemePolicy::Lexicographic {
            registry.with_fallback(LexicographicScheme);
        }

        Ok(registry)
    }
}

/// Returns the path to the configuration directory for vers.
/// Uses $XDG_CONFIG_HOME/vers if XDG_CONFIG_HOME is set,
/// otherwise falls back to ~/.config/vers,
/// or ./vers if neither is available.
pub fn config_dir() -> PathBuf {
    config_dir_with_env(std::env::var("XDG_CONFIG_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the configuration file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.json")
}

fn config_dir_with_env(xdg_config_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let config_dir = xdg_config_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."));

    config_dir.join("vers")
}
