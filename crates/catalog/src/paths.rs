//! Static path enumeration for category pages.

use storefront_core::CategoryKey;

use crate::category::Category;

/// Derive the exhaustive set of category page keys, one per record.
///
/// Keys are the category names (not ids), in input order. No deduplication:
/// duplicate names produce colliding paths, a data-quality issue in the
/// input rather than something handled here. Any key absent from this set
/// is unreachable (closed world, no dynamic fallback) until the paths are
/// regenerated.
pub fn enumerate_category_paths(categories: &[Category]) -> Vec<CategoryKey> {
    categories.iter().map(Category::key).collect()
}
