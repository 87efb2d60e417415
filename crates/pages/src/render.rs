//! Render-state composition.

use serde::Serialize;

use storefront_catalog::Product;
use storefront_contexts::{AuthSnapshot, CartSnapshot};

/// The three mutually exclusive view states a page can be in.
///
/// Derived, never stored: the view layer recomputes it from current inputs
/// on every render tick, so there is no transition logic and no history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RenderState {
    /// At least one collaborator (auth, cart) is still resolving.
    Loading,
    /// Both collaborators resolved and the query matched nothing.
    EmptyResult,
    /// Both collaborators resolved; the matched products, in catalog order.
    Populated(Vec<Product>),
}

impl RenderState {
    /// Compose from injected collaborator snapshots.
    pub fn compose(auth: &AuthSnapshot, cart: &CartSnapshot, results: Vec<Product>) -> Self {
        compose_state(auth.auth_loading(), cart.cart_loading(), results)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, RenderState::Loading)
    }
}

/// Decide which view state to expose.
///
/// Loading dominates: while either collaborator is still resolving, the
/// result set is not consulted at all, so a page never shows partial data.
/// Emptiness only means anything once both flags have cleared.
pub fn compose_state(
    auth_loading: bool,
    cart_loading: bool,
    results: Vec<Product>,
) -> RenderState {
    if auth_loading || cart_loading {
        RenderState::Loading
    } else if results.is_empty() {
        RenderState::EmptyResult
    } else {
        RenderState::Populated(results)
    }
}
