//! Entity trait: identity that outlives attribute values.

/// Marker + minimal interface for records with a stable identity.
///
/// Catalog records are entities: two products with identical attributes but
/// different ids are different products.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
