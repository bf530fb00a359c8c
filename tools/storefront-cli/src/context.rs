//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use storefront_commerce::catalog::LoadStatus;
use storefront_commerce::Storefront;
use storefront_data::{CatalogLoader, HttpProductSource};

use crate::config::{CliConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration, with command-line overrides applied.
    pub config: CliConfig,
    /// File the configuration was read from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from an explicit config file, or the nearest one found
    /// from the working directory upwards.
    pub fn load(config_path: Option<&str>, api_url: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (mut config, config_path) = match config_path {
            Some(path) => (CliConfig::load(path)?, Some(PathBuf::from(path))),
            None => match Self::find_config(&cwd)? {
                Some((path, config)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            },
        };

        if let Some(url) = api_url {
            config.api.products_url = url.to_string();
        }

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Find the nearest config file in the directory tree.
    pub fn find_config(start: &Path) -> Result<Option<(PathBuf, CliConfig)>> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.is_file() {
                    let config = CliConfig::load(&config_path.to_string_lossy())?;
                    return Ok(Some((config_path, config)));
                }
            }

            if !current.pop() {
                break;
            }
        }

        Ok(None)
    }

    /// Catalog loader for the configured endpoint.
    pub fn loader(&self) -> Result<CatalogLoader<HttpProductSource>> {
        let source = HttpProductSource::new(self.config.api.products_url.as_str())
            .context("Invalid api.products_url")?;
        Ok(CatalogLoader::new(source))
    }

    /// Load the catalog into `store`, showing a spinner while the request
    /// is in flight.
    pub async fn load_catalog(&self, store: &mut Storefront) -> Result<LoadStatus> {
        let loader = self.loader()?;
        self.output
            .debug(&format!("Fetching {}", loader.source().url()));

        let spinner = self.output.spinner("Loading...");
        let status = loader.reload(store.catalog_mut()).await;
        spinner.finish_and_clear();

        Ok(status?)
    }
}
