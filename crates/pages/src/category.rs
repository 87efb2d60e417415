//! Category page: static props resolution and rendering.

use storefront_catalog::{CatalogStore, filter_by_category};
use storefront_contexts::{AuthSnapshot, CartSnapshot};
use storefront_core::CategoryKey;

use crate::error::PageError;
use crate::render::RenderState;
use crate::static_paths::StaticPathPlan;

/// Props for one pre-generated category page: the path key echoed back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryPageProps {
    pub cat_name: CategoryKey,
}

/// Resolve props for a requested path key.
///
/// An identity transform (no I/O) for keys in the plan. Anything else is
/// rejected here, at the boundary, so the query core never needs a notion
/// of "missing category".
pub fn resolve_props(
    plan: &StaticPathPlan,
    key: CategoryKey,
) -> Result<CategoryPageProps, PageError> {
    if plan.is_reachable(&key) {
        Ok(CategoryPageProps { cat_name: key })
    } else {
        tracing::warn!(category = %key, "request for a category outside the static plan");
        Err(PageError::UnreachableCategory(key))
    }
}

/// Render the category listing for one tick of collaborator state.
pub fn render(
    props: &CategoryPageProps,
    store: &CatalogStore,
    auth: &AuthSnapshot,
    cart: &CartSnapshot,
) -> RenderState {
    let results = filter_by_category(store.products(), &props.cat_name);
    RenderState::compose(auth, cart, results)
}
