//! Catalog configuration.

use crate::error::{CatalogError, Result};
use crate::seed;
use crate::types::{Product, ProductId};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashSet;
use std::time::Duration;

/// Default number of products per page.
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Default idle time before typed search text takes effect.
pub const DEFAULT_SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

/// Default upper bound (inclusive) for "low stock".
pub const DEFAULT_LOW_STOCK_THRESHOLD: u64 = 5;

/// Catalog configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Products shown per page.
    pub page_size: usize,

    /// Idle delay before search text settles, in milliseconds on the wire.
    #[serde(
        rename = "search_debounce_ms",
        serialize_with = "serialize_millis",
        deserialize_with = "deserialize_millis"
    )]
    pub search_debounce: Duration,

    /// Products with `0 < stock <= low_stock_threshold` count as low stock.
    pub low_stock_threshold: u64,

    /// Products the store is seeded with.
    pub seed: Vec<Product>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            search_debounce: DEFAULT_SEARCH_DEBOUNCE,
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
            seed: seed::initial_products(),
        }
    }
}

impl CatalogConfig {
    /// Parse a configuration from JSON. Missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: CatalogConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// An empty catalog with default settings.
    pub fn empty() -> Self {
        Self {
            seed: Vec::new(),
            ..Default::default()
        }
    }

    /// Check invariants the rest of the catalog relies on.
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(CatalogError::InvalidConfig(
                "page_size must be at least 1".to_string(),
            ));
        }

        let mut seen = HashSet::with_capacity(self.seed.len());
        for product in &self.seed {
            if !seen.insert(product.id) {
                return Err(CatalogError::InvalidConfig(format!(
                    "duplicate seed product id {}",
                    product.id
                )));
            }
            if product.id == ProductId(u64::MAX) {
                return Err(CatalogError::InvalidConfig(format!(
                    "seed product id {} leaves no room for new products",
                    product.id
                )));
            }
            if !product.price.is_finite() || product.price < 0.0 {
                return Err(CatalogError::InvalidConfig(format!(
                    "seed product {} has invalid price {}",
                    product.id, product.price
                )));
            }
            if !product.stock.is_finite() || product.stock < 0.0 {
                return Err(CatalogError::InvalidConfig(format!(
                    "seed product {} has invalid stock {}",
                    product.id, product.stock
                )));
            }
        }

        Ok(())
    }
}

fn serialize_millis<S: Serializer>(value: &Duration, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_u64(value.as_millis() as u64)
}

fn deserialize_millis<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Duration, D::Error> {
    u64::deserialize(deserializer).map(Duration::from_millis)
}
