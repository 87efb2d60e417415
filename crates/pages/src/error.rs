//! Page-boundary errors.

use thiserror::Error;

use storefront_core::CategoryKey;

/// Error raised at the page-resolution boundary.
///
/// The query core is infallible; "missing" vs "empty" is only
/// distinguishable here, where the closed-world static plan is known.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PageError {
    /// The requested category key is not in the static plan, so no page
    /// exists for it.
    #[error("unreachable category: {0}")]
    UnreachableCategory(CategoryKey),
}
