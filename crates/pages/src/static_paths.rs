//! Build-time static path plan for category pages.

use std::collections::HashSet;

use storefront_catalog::{Category, enumerate_category_paths};
use storefront_core::CategoryKey;

/// The closed world of category pages.
///
/// Built once at generation time from the category records. A key outside
/// `paths()` has no page and never will until the plan is rebuilt; there is
/// no dynamic fallback for categories added afterwards.
#[derive(Debug, Clone)]
pub struct StaticPathPlan {
    paths: Vec<CategoryKey>,
    reachable: HashSet<CategoryKey>,
}

impl StaticPathPlan {
    pub fn build(categories: &[Category]) -> Self {
        let paths = enumerate_category_paths(categories);
        let reachable = paths.iter().cloned().collect();
        Self { paths, reachable }
    }

    /// Keys to pre-generate, one per category record, in input order.
    pub fn paths(&self) -> &[CategoryKey] {
        &self.paths
    }

    pub fn is_reachable(&self, key: &CategoryKey) -> bool {
        self.reachable.contains(key)
    }
}
