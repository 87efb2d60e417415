//! Cart collaborator snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storefront_core::{ProductId, ValueObject};

/// One line in the cart: a product reference and how many of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    pub qty: u32,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl ValueObject for CartLine {}

/// Read-only view of the cart collaborator's state at one render tick.
///
/// Mutation (add/remove) stays with the collaborator; per-item view controls
/// read [`quantity_of`](CartSnapshot::quantity_of). `cart_loading` is the
/// only field that gates rendering.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CartSnapshot {
    lines: Vec<CartLine>,
    cart_loading: bool,
}

impl CartSnapshot {
    pub fn new(lines: Vec<CartLine>, cart_loading: bool) -> Self {
        Self {
            lines,
            cart_loading,
        }
    }

    /// Cart resolution still in flight.
    pub fn loading() -> Self {
        Self {
            lines: Vec::new(),
            cart_loading: true,
        }
    }

    /// Resolved, empty cart.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn cart_loading(&self) -> bool {
        self.cart_loading
    }

    /// Total quantity of one product across all cart lines.
    pub fn quantity_of(&self, product_id: &ProductId) -> u32 {
        self.lines
            .iter()
            .filter(|line| line.product_id == *product_id)
            .map(|line| line.qty)
            .sum()
    }
}

impl ValueObject for CartSnapshot {}
