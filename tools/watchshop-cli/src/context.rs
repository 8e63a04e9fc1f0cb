//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use tracing::{debug, info};
use watchshop_catalog::catalog::{demo_catalog, Catalog};

use crate::config::CliConfig;
use crate::output::Output;

/// Config file names searched for, in order, from the working directory up.
const CONFIG_NAMES: [&str; 3] = ["watchshop.toml", ".watchshop.toml", "watchshop.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config = if let Some(path) = config_path {
            CliConfig::load(Path::new(path))?
        } else {
            Self::find_config(&cwd).unwrap_or_default()
        };

        Ok(Self {
            config,
            output,
            cwd,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<CliConfig> {
        let mut current = start.to_path_buf();
        loop {
            for name in CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = CliConfig::load(&config_path) {
                        return Some(config);
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Load the catalog named on the command line, else the configured one,
    /// else the built-in demo catalog.
    pub fn load_catalog(&self, path: Option<&str>) -> Result<Catalog> {
        let Some(path) = path.or(self.config.catalog.as_deref()) else {
            debug!("no catalog file configured, using demo catalog");
            return Ok(demo_catalog());
        };

        let path = self.resolve_path(path);
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read catalog: {}", path.display()))?;
        let catalog = Catalog::from_json(&content)
            .with_context(|| format!("Invalid catalog: {}", path.display()))?;

        info!(
            path = %path.display(),
            products = catalog.products.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if Path::new(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }
}
