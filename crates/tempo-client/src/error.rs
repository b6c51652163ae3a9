//! Error types for the client core
//!
//! Store operations return explicit results instead of letting gateway
//! failures escape unhandled; the caller is forced to look at the failure
//! path. No retries happen anywhere in this crate.

use crate::guard::GuardState;
use tempo_remote::GatewayError;

/// An entity store operation failed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The gateway round trip failed
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// A mutation was issued with no signed-in user
    #[error("no signed-in user")]
    NoActiveUser,
}

/// The guard was asked to make a transition its table forbids
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("illegal guard transition: {from:?} -> {to:?}")]
pub struct TransitionError {
    /// State the guard was in
    pub from: GuardState,
    /// State that was requested
    pub to: GuardState,
}
