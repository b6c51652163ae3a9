//! Entity store
//!
//! Bridges a remote per-user entity collection into local state. One
//! generic construct serves all four kinds; the protocol is always the
//! same:
//!
//! 1. normalize the draft (default-title substitution, enum coercion)
//! 2. one remote round trip
//! 3. one full refetch replacing the cached list wholesale
//!
//! The cached list is never patched in place and never the source of
//! truth — it reflects the last successful full fetch. Overlapping
//! mutations are not serialized against each other: their refetches race
//! and the last one to resolve wins. The loading flag is only cleared on
//! the success path, so a failed round trip leaves it set; both behaviors
//! are part of the contract and pinned by tests.

use crate::error::StoreError;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tempo_model::{EntityDraft, EntityId, EntityKind, UserId};
use tempo_remote::EntityGateway;

/// Reactive cache over one user-scoped entity collection
pub struct EntityStore<E: EntityKind> {
    gateway: Arc<dyn EntityGateway<E>>,
    user: RwLock<Option<UserId>>,
    items: RwLock<Vec<E>>,
    loading: AtomicBool,
}

impl<E: EntityKind> EntityStore<E> {
    /// Empty store over a gateway; populated once a user appears.
    #[must_use]
    pub fn new(gateway: Arc<dyn EntityGateway<E>>) -> Self {
        Self {
            gateway,
            user: RwLock::new(None),
            items: RwLock::new(Vec::new()),
            loading: AtomicBool::new(false),
        }
    }

    /// Current cached list, in the order the gateway returned it.
    #[must_use]
    pub fn snapshot(&self) -> Vec<E> {
        self.items.read().clone()
    }

    /// True while a fetch or mutation round trip is outstanding.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// User the cache is currently scoped to.
    #[must_use]
    pub fn current_user(&self) -> Option<UserId> {
        self.user.read().clone()
    }

    /// React to an identity change: a present user adopts the id and
    /// populates the cache; an absent user discards it entirely.
    pub async fn on_auth_change(&self, user: Option<UserId>) -> Result<(), StoreError> {
        match user {
            Some(uid) => {
                tracing::debug!(kind = E::KIND, user = %uid, "user present, populating");
                *self.user.write() = Some(uid.clone());
                self.refetch(&uid).await
            }
            None => {
                tracing::debug!(kind = E::KIND, "user absent, discarding cache");
                *self.user.write() = None;
                self.items.write().clear();
                Ok(())
            }
        }
    }

    /// Re-fetch the full collection and replace the cache wholesale.
    ///
    /// No-op when there is no current user.
    pub async fn refresh(&self) -> Result<(), StoreError> {
        let Some(user) = self.current_user() else {
            return Ok(());
        };
        self.refetch(&user).await
    }

    /// Create an entity from a draft, then refetch.
    ///
    /// An absent or empty draft title is substituted with
    /// [`EntityKind::DEFAULT_TITLE`] before the call goes out.
    pub async fn add(&self, mut draft: E::Draft) -> Result<(), StoreError> {
        let user = self.current_user().ok_or(StoreError::NoActiveUser)?;
        draft.normalize();
        self.loading.store(true, Ordering::SeqCst);
        let created = self.gateway.create(draft, &user).await?;
        tracing::info!(kind = E::KIND, id = %created.id(), "created");
        self.refetch(&user).await
    }

    /// Partially update the entity with `id`, then refetch.
    ///
    /// Same draft normalization as [`add`](Self::add). The id is not
    /// checked against the cache first; a miss surfaces as the gateway's
    /// not-found error.
    pub async fn update_by_id(&self, id: &EntityId, mut draft: E::Draft) -> Result<(), StoreError> {
        let user = self.current_user().ok_or(StoreError::NoActiveUser)?;
        draft.normalize();
        self.loading.store(true, Ordering::SeqCst);
        self.gateway.update(id, draft, &user).await?;
        tracing::info!(kind = E::KIND, %id, "updated");
        self.refetch(&user).await
    }

    /// Delete the entity with `id`, then refetch.
    pub async fn remove_by_id(&self, id: &EntityId) -> Result<(), StoreError> {
        let user = self.current_user().ok_or(StoreError::NoActiveUser)?;
        self.loading.store(true, Ordering::SeqCst);
        self.gateway.delete(id, &user).await?;
        tracing::info!(kind = E::KIND, %id, "deleted");
        self.refetch(&user).await
    }

    async fn refetch(&self, user: &UserId) -> Result<(), StoreError> {
        self.loading.store(true, Ordering::SeqCst);
        let fetched = self.gateway.fetch_all(user).await?;
        tracing::debug!(kind = E::KIND, count = fetched.len(), "cache replaced");
        *self.items.write() = fetched;
        self.loading.store(false, Ordering::SeqCst);
        Ok(())
    }
}

impl<E: EntityKind> std::fmt::Debug for EntityStore<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntityStore")
            .field("kind", &E::KIND)
            .field("user", &*self.user.read())
            .field("items", &self.items.read().len())
            .field("loading", &self.is_loading())
            .finish()
    }
}
