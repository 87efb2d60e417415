//! Search page: request-time query resolution and rendering.

use storefront_catalog::{CatalogStore, search};
use storefront_contexts::{AuthSnapshot, CartSnapshot};

use crate::render::RenderState;

/// Props for a search page: the raw query segment from the request.
///
/// Deliberately unnormalized; the search matcher owns lowercasing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPageProps {
    pub query: String,
}

impl SearchPageProps {
    /// Take the query segment exactly as the router extracted it.
    pub fn from_request_segment(segment: impl Into<String>) -> Self {
        Self {
            query: segment.into(),
        }
    }
}

/// Render the search results for one tick of collaborator state.
pub fn render(
    props: &SearchPageProps,
    store: &CatalogStore,
    auth: &AuthSnapshot,
    cart: &CartSnapshot,
) -> RenderState {
    let results = search(store.products(), &props.query);
    RenderState::compose(auth, cart, results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_catalog::{Category, Product};
    use storefront_core::{CategoryId, CategoryKey, ProductId};

    fn product(id: &str, name: &str, category: &str, tags: &[&str]) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            price: "40".to_string(),
            price_before_discount: "50".to_string(),
            discount: "20".to_string(),
            quantity: "1 kg".to_string(),
            category: CategoryKey::new(category),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            img: "/assets/thumb.png".to_string(),
            img_lg: "/assets/large.png".to_string(),
        }
    }

    fn store() -> CatalogStore {
        CatalogStore::new(
            vec![
                product("1", "Fresh Milk", "Dairy", &["dairy", "drink"]),
                product("2", "Orange Juice", "Beverages", &["drink", "juice"]),
            ],
            vec![Category {
                id: CategoryId::new("c1"),
                name: "Dairy".to_string(),
            }],
        )
    }

    #[test]
    fn props_keep_the_request_segment_untouched() {
        let props = SearchPageProps::from_request_segment("Fresh MILK ");
        assert_eq!(props.query, "Fresh MILK ");
    }

    #[test]
    fn render_matches_raw_uppercase_segments() {
        let props = SearchPageProps::from_request_segment("MILK");
        let state = render(
            &props,
            &store(),
            &AuthSnapshot::anonymous(),
            &CartSnapshot::empty(),
        );

        match state {
            RenderState::Populated(products) => {
                assert_eq!(products.len(), 1);
                assert_eq!(products[0].name, "Fresh Milk");
            }
            other => panic!("Expected Populated state, got {other:?}"),
        }
    }

    #[test]
    fn render_with_no_matches_is_empty_result() {
        let props = SearchPageProps::from_request_segment("spaceship");
        let state = render(
            &props,
            &store(),
            &AuthSnapshot::anonymous(),
            &CartSnapshot::empty(),
        );
        assert_eq!(state, RenderState::EmptyResult);
    }

    #[test]
    fn render_while_loading_never_exposes_results() {
        let props = SearchPageProps::from_request_segment("drink");
        let state = render(
            &props,
            &store(),
            &AuthSnapshot::anonymous(),
            &CartSnapshot::loading(),
        );
        assert!(state.is_loading());
    }

    #[test]
    fn render_with_empty_segment_returns_whole_catalog() {
        let props = SearchPageProps::from_request_segment("");
        let state = render(
            &props,
            &store(),
            &AuthSnapshot::anonymous(),
            &CartSnapshot::empty(),
        );

        match state {
            RenderState::Populated(products) => assert_eq!(products.len(), 2),
            other => panic!("Expected Populated state, got {other:?}"),
        }
    }
}
