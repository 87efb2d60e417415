//! Auth collaborator snapshot.

use serde::{Deserialize, Serialize};

use storefront_core::{UserId, ValueObject};

/// The signed-in user as the auth collaborator reports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

impl ValueObject for User {}

/// Read-only view of the auth collaborator's state at one render tick.
///
/// The collaborator owns and updates this on its own schedule (typically
/// after a network round trip); the engine only reads it. `auth_loading`
/// gates rendering; `is_authenticated` and `user` feed view chrome only.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AuthSnapshot {
    is_authenticated: bool,
    auth_loading: bool,
    user: Option<User>,
}

impl AuthSnapshot {
    pub fn new(is_authenticated: bool, auth_loading: bool, user: Option<User>) -> Self {
        Self {
            is_authenticated,
            auth_loading,
            user,
        }
    }

    /// Session resolution still in flight.
    pub fn loading() -> Self {
        Self {
            is_authenticated: false,
            auth_loading: true,
            user: None,
        }
    }

    /// Resolved, signed-in.
    pub fn authenticated(user: User) -> Self {
        Self {
            is_authenticated: true,
            auth_loading: false,
            user: Some(user),
        }
    }

    /// Resolved, anonymous.
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    pub fn auth_loading(&self) -> bool {
        self.auth_loading
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }
}

impl ValueObject for AuthSnapshot {}
