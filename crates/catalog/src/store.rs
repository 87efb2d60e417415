//! Immutable in-memory catalog store.

use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult};

use crate::category::Category;
use crate::product::Product;

/// The full catalog available to the query engine.
///
/// Populated once (process or build start) and read-only afterwards. Queries
/// never mutate it, so it can be shared across concurrent render cycles
/// without coordination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStore {
    products: Vec<Product>,
    categories: Vec<Category>,
}

impl CatalogStore {
    pub fn new(products: Vec<Product>, categories: Vec<Category>) -> Self {
        let store = Self {
            products,
            categories,
        };
        store.scan_data_quality();
        store
    }

    /// Decode a catalog snapshot from its JSON wire form.
    pub fn from_json_str(json: &str) -> DomainResult<Self> {
        let store: Self =
            serde_json::from_str(json).map_err(|e| DomainError::malformed(e.to_string()))?;
        store.scan_data_quality();
        Ok(store)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Report data-quality findings without failing the load.
    ///
    /// A dangling category reference only makes a product invisible to
    /// category browsing; duplicate category names collide on one static
    /// path. Both degrade to "nothing found" downstream, so they warn
    /// rather than error.
    fn scan_data_quality(&self) {
        use std::collections::HashSet;

        let known: HashSet<&str> = self.categories.iter().map(|c| c.name.as_str()).collect();
        for product in &self.products {
            if !known.contains(product.category.as_str()) {
                tracing::warn!(
                    product_id = %product.id,
                    category = %product.category,
                    "product references an unknown category and will not appear in any listing"
                );
            }
        }

        let mut seen = HashSet::new();
        for category in &self.categories {
            if !seen.insert(category.name.as_str()) {
                tracing::warn!(
                    category = %category.name,
                    "duplicate category name; static paths will collide"
                );
            }
        }
    }
}
