//! Value object trait: equality by value, not identity.

/// Marker trait for immutable values compared by their attributes.
///
/// Collaborator snapshots and cart lines are value objects: two snapshots
/// with the same flags and contents are interchangeable, and "modifying"
/// one means building a new one. Contrast with [`Entity`](crate::Entity),
/// where identity persists across attribute changes.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
