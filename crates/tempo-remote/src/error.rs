//! Error types for the remote seams
//!
//! Everything a remote call can fail with. No retries happen at this
//! layer; callers get the error and decide.

use tempo_model::{EntityId, UserId};

/// A gateway round trip failed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    /// Backend unreachable or returned a transport-level failure
    #[error("remote backend unavailable: {0}")]
    Unavailable(String),

    /// No document with this id in the user's collection
    #[error("no {kind} with id {id}")]
    NotFound {
        /// Entity kind name
        kind: &'static str,
        /// The id that missed
        id: EntityId,
    },

    /// Backend rejected the caller's credentials for this collection
    #[error("permission denied for user {0}")]
    PermissionDenied(UserId),

    /// Backend rejected the payload
    #[error("invalid payload: {0}")]
    Invalid(String),
}

/// An auth account operation failed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// No session to operate on
    #[error("no active session")]
    NoSession,

    /// Backend failure
    #[error("auth backend error: {0}")]
    Backend(String),
}

/// The command interpreter failed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// Interpreter unreachable
    #[error("command interpreter unavailable: {0}")]
    Unavailable(String),

    /// Interpreter gave up on the input
    #[error("could not interpret input")]
    Unintelligible,
}
