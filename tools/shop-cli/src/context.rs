//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use turbo_cache::Cache;
use turbo_commerce::cart::PersistedCart;
use turbo_commerce::catalog::MockCatalog;
use turbo_commerce::checkout::MockOrderGateway;

use crate::config::{ShopConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// The cart as the CLI stores it.
pub type ShopCart = PersistedCart<Cache>;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: ShopConfig,
    /// Where the configuration was loaded from, if a file was found.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            let path = resolve(&cwd, Path::new(path));
            (ShopConfig::load(&path)?, Some(path))
        } else {
            // Try to find config in current directory or parent directories
            match find_config(&cwd) {
                Some((path, config)) => (config, Some(path)),
                None => (ShopConfig::default(), None),
            }
        };

        if let Some(path) = &config_path {
            output.debug(&format!("Using config {}", path.display()));
        }

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// The directory the cart is stored in.
    ///
    /// Relative `data_dir` values are resolved against the config file's
    /// directory, or the working directory when there is no config file.
    pub fn data_dir(&self) -> PathBuf {
        let base = self
            .config_path
            .as_deref()
            .and_then(Path::parent)
            .unwrap_or(&self.cwd);
        resolve(base, Path::new(&self.config.store.data_dir))
    }

    /// Open the local store and restore the cart from it.
    pub fn open_cart(&self) -> Result<ShopCart> {
        let dir = self.data_dir();
        let cache = Cache::open(&dir)
            .with_context(|| format!("Failed to open cart storage at {}", dir.display()))?;
        self.output.debug(&format!("Cart storage: {}", dir.display()));
        Ok(PersistedCart::restore(cache))
    }

    pub fn catalog(&self) -> MockCatalog {
        MockCatalog::demo().with_latency(self.config.catalog_latency())
    }

    pub fn gateway(&self) -> MockOrderGateway {
        MockOrderGateway::new().with_latency(self.config.order_latency())
    }
}

/// Find config file in directory tree.
fn find_config(start: &Path) -> Option<(PathBuf, ShopConfig)> {
    for dir in start.ancestors() {
        for name in CONFIG_FILE_NAMES {
            let path = dir.join(name);
            if !path.exists() {
                continue;
            }
            match ShopConfig::load(&path) {
                Ok(config) => return Some((path, config)),
                Err(e) => tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable config"),
            }
        }
    }
    None
}

fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
