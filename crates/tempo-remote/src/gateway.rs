//! Entity gateway trait
//!
//! One implementation per backend; the client holds one instance per
//! entity kind. All calls are scoped server-side by `user`; a gateway must
//! never leak one user's documents to another.

use crate::error::GatewayError;
use tempo_model::{EntityId, EntityKind, UserId};

/// Async CRUD over one user-scoped entity collection
#[async_trait::async_trait]
pub trait EntityGateway<E: EntityKind>: Send + Sync {
    /// Fetch the full collection for `user`, in storage order.
    async fn fetch_all(&self, user: &UserId) -> Result<Vec<E>, GatewayError>;

    /// Create an entity from a draft; the gateway assigns the id.
    ///
    /// The draft arrives already normalized (default title substituted,
    /// enum coercion applied) by the client.
    async fn create(&self, draft: E::Draft, user: &UserId) -> Result<E, GatewayError>;

    /// Partially update the entity with `id`; absent draft fields are
    /// left untouched.
    async fn update(&self, id: &EntityId, draft: E::Draft, user: &UserId)
        -> Result<E, GatewayError>;

    /// Delete the entity with `id`.
    async fn delete(&self, id: &EntityId, user: &UserId) -> Result<(), GatewayError>;
}
