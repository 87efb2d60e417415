use serde::{Deserialize, Serialize};

use storefront_core::{CategoryId, CategoryKey, Entity};

/// Catalog record: a browsable category.
///
/// `name` doubles as the routing key: navigation links and static page
/// generation both key on it, and names are expected to be unique. `id` is
/// carried for external consumers and never used for lookup here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

impl Category {
    /// The routing/lookup key derived from the display name.
    pub fn key(&self) -> CategoryKey {
        CategoryKey::new(self.name.clone())
    }
}

impl Entity for Category {
    type Id = CategoryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
