use serde::{Deserialize, Serialize};

use storefront_core::{CategoryKey, Entity, ProductId};

/// Catalog record: a single sellable product.
///
/// A plain data contract. Field names match the upstream dataset wire form
/// (`img`, `img_lg`, `price_before_discount`). Monetary fields stay display
/// strings; currency formatting is owned elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: String,
    pub price_before_discount: String,
    /// Percentage as a display string, e.g. "20".
    pub discount: String,
    /// Free-text unit descriptor, e.g. "1 kg".
    pub quantity: String,
    /// Foreign key into [`Category`](crate::Category) by name. A dangling
    /// reference makes the product unreachable via category browsing (it
    /// still turns up in search); that is an empty listing, not an error.
    pub category: CategoryKey,
    /// Free-text labels; not guaranteed unique or normalized.
    pub tags: Vec<String>,
    pub img: String,
    pub img_lg: String,
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
