//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use watchshop_catalog::search::DEFAULT_PAGE_SIZE;
use watchshop_catalog::search::SortKey;

/// CLI configuration file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CliConfig {
    /// Catalog JSON file; the demo catalog is used when unset.
    #[serde(default)]
    pub catalog: Option<String>,

    /// Page size when `--page-size` is not given.
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,

    /// Sort key when `--sort` is not given.
    #[serde(default)]
    pub default_sort: SortKey,

    /// Logging configuration.
    #[serde(default)]
    pub log: LogConfig,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            default_page_size: default_page_size(),
            default_sort: SortKey::default(),
            log: LogConfig::default(),
        }
    }
}

impl CliConfig {
    /// Load config from a file. `.json` files are parsed as JSON, anything else as TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if path.extension().is_some_and(|e| e == "json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogConfig {
    /// Default filter directive; `RUST_LOG` takes precedence.
    #[serde(default = "default_level")]
    pub level: String,

    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

fn default_level() -> String {
    "warn".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Compact human-readable lines.
    #[default]
    Compact,
    /// One JSON object per event.
    Json,
}
