//! CLI configuration.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use turbo_commerce::catalog::CatalogLatency;
use turbo_commerce::search::DEFAULT_PAGE_SIZE;

/// File names searched for, in order, in each directory.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["shop.toml", ".shop.toml", "shop.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShopConfig {
    /// Local storage.
    #[serde(default)]
    pub store: StoreConfig,

    /// Product catalog.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Interactive search.
    #[serde(default)]
    pub search: SearchConfig,

    /// Order placement.
    #[serde(default)]
    pub checkout: CheckoutConfig,
}

impl ShopConfig {
    /// Load config from a file. `.json` files are parsed as JSON, anything
    /// else as TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    pub fn catalog_latency(&self) -> CatalogLatency {
        CatalogLatency {
            list: Duration::from_millis(self.catalog.latency_ms),
            lookup: Duration::from_millis(self.catalog.lookup_latency_ms),
        }
    }

    pub fn debounce_window(&self) -> Duration {
        Duration::from_millis(self.search.debounce_ms)
    }

    pub fn order_latency(&self) -> Duration {
        Duration::from_millis(self.checkout.latency_ms)
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Local storage configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Directory the cart is persisted in, relative to the config file.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

fn default_data_dir() -> String {
    ".shop".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

/// Catalog configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Simulated latency of product listings.
    #[serde(default = "default_list_latency")]
    pub latency_ms: u64,

    /// Simulated latency of single product and category lookups.
    #[serde(default = "default_lookup_latency")]
    pub lookup_latency_ms: u64,

    /// Products per page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_list_latency() -> u64 {
    500
}

fn default_lookup_latency() -> u64 {
    300
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_list_latency(),
            lookup_latency_ms: default_lookup_latency(),
            page_size: default_page_size(),
        }
    }
}

/// Interactive search configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Quiet period before a search runs.
    #[serde(default = "default_debounce")]
    pub debounce_ms: u64,
}

fn default_debounce() -> u64 {
    300
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce(),
        }
    }
}

/// Checkout configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutConfig {
    /// Simulated latency of order submission.
    #[serde(default = "default_order_latency")]
    pub latency_ms: u64,
}

fn default_order_latency() -> u64 {
    1500
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_order_latency(),
        }
    }
}

/// Generate a default shop.toml config file.
pub fn generate_default_config() -> String {
    r#"# Turbo Shop configuration

[store]
# Where the cart is kept between runs, relative to this file
data_dir = ".shop"

[catalog]
# Simulated latency of the mock product source
latency_ms = 500
lookup_latency_ms = 300
page_size = 12

[search]
debounce_ms = 300

[checkout]
# Simulated latency of the mock order gateway
latency_ms = 1500
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_config_matches_defaults() {
        let parsed: ShopConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(parsed, ShopConfig::default());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let parsed: ShopConfig = toml::from_str("[catalog]\nlatency_ms = 0\n").unwrap();
        assert_eq!(parsed.catalog.latency_ms, 0);
        assert_eq!(parsed.catalog.lookup_latency_ms, 300);
        assert_eq!(parsed.search.debounce_ms, 300);
        assert_eq!(parsed.store.data_dir, ".shop");
    }

    #[test]
    fn test_load_json_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shop.json");
        std::fs::write(&path, r#"{"checkout": {"latency_ms": 10}}"#).unwrap();

        let config = ShopConfig::load(&path).unwrap();
        assert_eq!(config.checkout.latency_ms, 10);
        assert_eq!(config.catalog, CatalogConfig::default());
    }

    #[test]
    fn test_load_reports_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shop.toml");
        std::fs::write(&path, "[catalog\n").unwrap();

        let err = ShopConfig::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse TOML config"));
    }

    #[test]
    fn test_durations() {
        let config = ShopConfig::default();
        assert_eq!(config.debounce_window(), Duration::from_millis(300));
        assert_eq!(config.order_latency(), Duration::from_millis(1500));
        assert_eq!(config.catalog_latency(), CatalogLatency::default());
    }
}
