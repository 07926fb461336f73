//! Runtime settings: API base URL, search debounce period and page size.
//!
//! Layers apply in order, later wins: built-in defaults, an optional TOML
//! file, then environment variables. Numeric values that are zero or do not
//! parse are ignored and leave the earlier layer's value in place.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::CatalogError;
use crate::validation;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 500;
pub const DEFAULT_PAGE_SIZE: u32 = 10;

pub const ENV_API_BASE_URL: &str = "CATALOG_API_BASE_URL";
pub const ENV_SEARCH_DEBOUNCE_PERIOD: &str = "CATALOG_SEARCH_DEBOUNCE_PERIOD";
pub const ENV_PAGE_SIZE: &str = "CATALOG_PAGE_SIZE";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogConfig {
    pub api_base_url: String,
    pub search_debounce: Duration,
    pub page_size: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            search_debounce: Duration::from_millis(DEFAULT_SEARCH_DEBOUNCE_MS),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    api_base_url: Option<String>,
    search_debounce_ms: Option<u64>,
    page_size: Option<u32>,
}

impl CatalogConfig {
    /// Defaults overlaid with the process environment.
    pub fn from_env() -> Self {
        Self::default().with_env_lookup(|key| std::env::var(key).ok())
    }

    /// Overlays values from `lookup`, which maps an env var name to its value.
    pub fn with_env_lookup<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_API_BASE_URL) {
            match validation::validate_base_url(&url) {
                Ok(url) => self.api_base_url = url,
                Err(e) => tracing::warn!("Ignoring {}: {}", ENV_API_BASE_URL, e),
            }
        }
        if let Some(ms) = lookup(ENV_SEARCH_DEBOUNCE_PERIOD) {
            match positive::<u64>(&ms) {
                Some(ms) => self.search_debounce = Duration::from_millis(ms),
                None => tracing::warn!(
                    "Ignoring {}={:?}, expected a positive number of milliseconds",
                    ENV_SEARCH_DEBOUNCE_PERIOD,
                    ms
                ),
            }
        }
        if let Some(size) = lookup(ENV_PAGE_SIZE) {
            match positive::<u32>(&size).and_then(|s| validation::validate_limit(s).ok()) {
                Some(size) => self.page_size = size,
                None => tracing::warn!("Ignoring {}={:?}", ENV_PAGE_SIZE, size),
            }
        }
        self
    }

    /// Overlays values from a TOML document. Unlike the environment layer,
    /// bad values here are errors: the file was written on purpose.
    pub fn with_toml_str(mut self, text: &str) -> Result<Self, CatalogError> {
        let file: ConfigFile =
            toml::from_str(text).map_err(|e| CatalogError::Config(e.to_string()))?;
        if let Some(url) = file.api_base_url {
            self.api_base_url = validation::validate_base_url(&url)?;
        }
        if let Some(ms) = file.search_debounce_ms {
            if ms == 0 {
                return Err(CatalogError::Config(
                    "search_debounce_ms must be greater than 0".to_string(),
                ));
            }
            self.search_debounce = Duration::from_millis(ms);
        }
        if let Some(size) = file.page_size {
            self.page_size = validation::validate_limit(size)?;
        }
        Ok(self)
    }

    /// Overlays values from a TOML file on disk.
    pub fn with_file(self, path: &Path) -> Result<Self, CatalogError> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            CatalogError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        self.with_toml_str(&text)
    }
}

fn positive<T>(raw: &str) -> Option<T>
where
    T: std::str::FromStr + PartialOrd + Default,
{
    raw.trim()
        .parse::<T>()
        .ok()
        .filter(|v| *v > T::default())
}
