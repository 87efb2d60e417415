//! The query core: category filtering and free-text search.
//!
//! Both functions are pure and infallible: no match is an empty result, not
//! an error, and input order is always preserved.

use storefront_core::CategoryKey;

use crate::product::Product;

/// Select every product whose category equals `key`.
///
/// Comparison is exact and case-sensitive. The result is a stable filter of
/// `catalog`: matching products keep their original relative order.
pub fn filter_by_category(catalog: &[Product], key: &CategoryKey) -> Vec<Product> {
    catalog
        .iter()
        .filter(|product| product.category == *key)
        .cloned()
        .collect()
}

/// Select every product matching a free-text query.
///
/// The engine lowercases the query here, once; callers pass the raw string
/// and must not pre-lowercase. A product matches when its lowercased name
/// contains the query as a substring, or when the query equals one of its
/// tags (each tag lowercased individually). Name matching is substring, tag
/// matching is exact equality; the asymmetry is intentional.
///
/// An empty query is evaluated literally: every name contains `""`, so it
/// matches the whole catalog.
pub fn search(catalog: &[Product], query: &str) -> Vec<Product> {
    let query = query.to_lowercase();
    catalog
        .iter()
        .filter(|product| matches_query(product, &query))
        .cloned()
        .collect()
}

fn matches_query(product: &Product, query: &str) -> bool {
    product.name.to_lowercase().contains(query)
        || product.tags.iter().any(|tag| tag.to_lowercase() == query)
}
