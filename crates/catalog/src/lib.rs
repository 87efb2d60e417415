//! Catalog domain: data contracts, the immutable store, and the query core.
//!
//! Everything here is deterministic, side-effect-free domain logic (no IO
//! beyond decoding a JSON snapshot the caller already resolved, no HTTP,
//! no storage).

pub mod category;
pub mod paths;
pub mod product;
pub mod query;
pub mod store;

pub use category::Category;
pub use paths::enumerate_category_paths;
pub use product::Product;
pub use query::{filter_by_category, search};
pub use store::CatalogStore;
