//! Auth source trait

use crate::error::AuthError;
use tempo_model::AuthSnapshot;
use tokio::sync::watch;

/// Session state publisher plus account operations
///
/// Implementations push a fresh [`AuthSnapshot`] into the watch channel
/// whenever the session changes; the route guard and the entity stores
/// both drive off that channel.
#[async_trait::async_trait]
pub trait AuthSource: Send + Sync {
    /// Subscribe to session snapshots. The receiver's current value is
    /// always the latest known state.
    fn subscribe(&self) -> watch::Receiver<AuthSnapshot>;

    /// End the current session.
    async fn logout(&self) -> Result<(), AuthError>;

    /// Send a password-reset email.
    async fn reset_password(&self, email: &str) -> Result<(), AuthError>;

    /// Send a verification email to the signed-in account.
    async fn verify_email(&self) -> Result<(), AuthError>;
}
