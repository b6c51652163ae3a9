//! Auth session types
//!
//! The auth backend itself is an external collaborator; these types are
//! the snapshot it publishes to the client.

use crate::ids::UserId;
use serde::{Deserialize, Serialize};

/// Profile of the signed-in account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub uid: UserId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub email_verified: bool,
}

impl AuthUser {
    /// Bare profile for a uid
    #[must_use]
    pub fn new(uid: impl Into<UserId>) -> Self {
        Self {
            uid: uid.into(),
            email: None,
            display_name: None,
            photo_url: None,
            email_verified: false,
        }
    }

    /// With email address
    #[inline]
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// With display name
    #[inline]
    #[must_use]
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }
}

/// What the auth source currently knows about the session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSnapshot {
    /// Signed-in account, if resolved
    pub user: Option<AuthUser>,
    /// True while the initial session check is still in flight
    pub is_loading: bool,
}

impl AuthSnapshot {
    /// Session check still in flight
    #[must_use]
    pub fn loading() -> Self {
        Self {
            user: None,
            is_loading: true,
        }
    }

    /// Session check finished with the given outcome
    #[must_use]
    pub fn resolved(user: Option<AuthUser>) -> Self {
        Self {
            user,
            is_loading: false,
        }
    }

    /// Uid of the signed-in account, if any
    #[must_use]
    pub fn uid(&self) -> Option<UserId> {
        self.user.as_ref().map(|u| u.uid.clone())
    }
}
