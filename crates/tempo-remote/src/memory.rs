//! In-memory backend
//!
//! Honors the gateway and auth contracts against process-local state.
//! Backs the demo binary and most of the test suite; also the reference
//! for what "an honest backend" means in the store tests.

use crate::auth::AuthSource;
use crate::error::{AuthError, GatewayError};
use crate::gateway::EntityGateway;
use dashmap::DashMap;
use tempo_model::{AuthSnapshot, AuthUser, EntityDraft, EntityId, EntityKind, UserId};
use tokio::sync::watch;

/// Per-user entity collections held in a [`DashMap`]
///
/// Ids are assigned on create, storage order is insertion order, and every
/// call is scoped to the caller's user id — one user's documents are never
/// visible through another's.
#[derive(Debug)]
pub struct InMemoryGateway<E: EntityKind> {
    collections: DashMap<UserId, Vec<E>>,
}

impl<E: EntityKind> Default for InMemoryGateway<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EntityKind> InMemoryGateway<E> {
    /// Empty gateway
    #[must_use]
    pub fn new() -> Self {
        Self {
            collections: DashMap::new(),
        }
    }

    /// Number of documents stored for `user`
    #[must_use]
    pub fn len(&self, user: &UserId) -> usize {
        self.collections.get(user).map_or(0, |c| c.len())
    }

    /// Whether `user` has no documents
    #[must_use]
    pub fn is_empty(&self, user: &UserId) -> bool {
        self.len(user) == 0
    }
}

#[async_trait::async_trait]
impl<E: EntityKind> EntityGateway<E> for InMemoryGateway<E> {
    async fn fetch_all(&self, user: &UserId) -> Result<Vec<E>, GatewayError> {
        Ok(self
            .collections
            .get(user)
            .map(|c| c.clone())
            .unwrap_or_default())
    }

    async fn create(&self, draft: E::Draft, user: &UserId) -> Result<E, GatewayError> {
        let entity = draft.materialize(EntityId::generate());
        tracing::debug!(kind = E::KIND, user = %user, id = %entity.id(), "created");
        self.collections
            .entry(user.clone())
            .or_default()
            .push(entity.clone());
        Ok(entity)
    }

    async fn update(
        &self,
        id: &EntityId,
        draft: E::Draft,
        user: &UserId,
    ) -> Result<E, GatewayError> {
        let mut collection =
            self.collections
                .get_mut(user)
                .ok_or_else(|| GatewayError::NotFound {
                    kind: E::KIND,
                    id: id.clone(),
                })?;
        let entity = collection
            .iter_mut()
            .find(|e| e.id() == id)
            .ok_or_else(|| GatewayError::NotFound {
                kind: E::KIND,
                id: id.clone(),
            })?;
        draft.apply_to(entity);
        tracing::debug!(kind = E::KIND, user = %user, id = %id, "updated");
        Ok(entity.clone())
    }

    async fn delete(&self, id: &EntityId, user: &UserId) -> Result<(), GatewayError> {
        let mut collection =
            self.collections
                .get_mut(user)
                .ok_or_else(|| GatewayError::NotFound {
                    kind: E::KIND,
                    id: id.clone(),
                })?;
        let before = collection.len();
        collection.retain(|e| e.id() != id);
        if collection.len() == before {
            return Err(GatewayError::NotFound {
                kind: E::KIND,
                id: id.clone(),
            });
        }
        tracing::debug!(kind = E::KIND, user = %user, id = %id, "deleted");
        Ok(())
    }
}

/// Process-local auth source
///
/// Tests and demos drive the session through [`MemoryAuth::resolve`] and
/// [`MemoryAuth::begin_check`]; consumers only ever see the
/// [`AuthSource`] trait.
#[derive(Debug)]
pub struct MemoryAuth {
    tx: watch::Sender<AuthSnapshot>,
}

impl MemoryAuth {
    /// Start with the session check still in flight
    #[must_use]
    pub fn loading() -> Self {
        let (tx, _) = watch::channel(AuthSnapshot::loading());
        Self { tx }
    }

    /// Start already signed in
    #[must_use]
    pub fn signed_in(user: AuthUser) -> Self {
        let (tx, _) = watch::channel(AuthSnapshot::resolved(Some(user)));
        Self { tx }
    }

    /// Start resolved with no session
    #[must_use]
    pub fn signed_out() -> Self {
        let (tx, _) = watch::channel(AuthSnapshot::resolved(None));
        Self { tx }
    }

    /// Resolve the session check with the given outcome
    pub fn resolve(&self, user: Option<AuthUser>) {
        self.tx.send_replace(AuthSnapshot::resolved(user));
    }

    /// Put the source back into the loading state
    pub fn begin_check(&self) {
        self.tx.send_replace(AuthSnapshot::loading());
    }

    /// Current snapshot
    #[must_use]
    pub fn snapshot(&self) -> AuthSnapshot {
        self.tx.borrow().clone()
    }
}

#[async_trait::async_trait]
impl AuthSource for MemoryAuth {
    fn subscribe(&self) -> watch::Receiver<AuthSnapshot> {
        self.tx.subscribe()
    }

    async fn logout(&self) -> Result<(), AuthError> {
        tracing::info!("logging out");
        self.tx.send_replace(AuthSnapshot::resolved(None));
        Ok(())
    }

    async fn reset_password(&self, email: &str) -> Result<(), AuthError> {
        tracing::info!(email, "password reset requested");
        Ok(())
    }

    async fn verify_email(&self) -> Result<(), AuthError> {
        if self.tx.borrow().user.is_none() {
            return Err(AuthError::NoSession);
        }
        tracing::info!("verification email requested");
        Ok(())
    }
}
