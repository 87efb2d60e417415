//! Externally-owned collaborator contexts (auth, cart).
//!
//! Each collaborator hands the engine an immutable snapshot per render tick.
//! The engine only reads the loading flags; everything else on a snapshot
//! feeds peripheral view chrome. Snapshots are injected at call time, never
//! global, which keeps the query core free of hidden shared state.

pub mod auth;
pub mod cart;

pub use auth::{AuthSnapshot, User};
pub use cart::{CartLine, CartSnapshot};
