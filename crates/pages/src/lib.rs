//! Page boundary: render-state composition, the static path plan, and the
//! category/search page resolvers.
//!
//! No HTTP, routing, or markup lives here. The surrounding view layer calls
//! in with already-resolved inputs (catalog store, collaborator snapshots,
//! path or query segment) and renders whatever [`RenderState`] comes back.

pub mod category;
pub mod error;
pub mod render;
pub mod search;
pub mod static_paths;

pub use error::PageError;
pub use render::{RenderState, compose_state};
pub use static_paths::StaticPathPlan;
