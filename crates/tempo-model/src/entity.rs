//! Entity kind and draft traits
//!
//! The four entity kinds share one structural shape: a server-assigned id,
//! a title, and a handful of optional fields. The sync engine is generic
//! over that shape; these two traits are the seam.

use crate::ids::EntityId;
use std::fmt;

/// A user-scoped record type with CRUD semantics.
///
/// Implemented by [`Task`](crate::Task), [`Goal`](crate::Goal),
/// [`Event`](crate::Event), and [`Project`](crate::Project).
pub trait EntityKind: Clone + fmt::Debug + Send + Sync + 'static {
    /// Partial-field companion used for create and update calls.
    type Draft: EntityDraft<Entity = Self>;

    /// Lowercase kind name, used in logs and gateway errors.
    const KIND: &'static str;

    /// Placeholder title substituted when a draft carries none.
    ///
    /// The client never rejects an empty title; it substitutes this.
    const DEFAULT_TITLE: &'static str;

    /// Server-assigned identifier.
    fn id(&self) -> &EntityId;

    /// Identifying label, never empty after normalization.
    fn title(&self) -> &str;
}

/// Partial entity submitted to create/update operations.
///
/// Every field is optional; [`normalize`](EntityDraft::normalize) applies
/// the boundary rules (default-title substitution, and for projects the
/// silent coercion of unknown status strings) before the draft leaves the
/// client.
pub trait EntityDraft: Clone + fmt::Debug + Default + Send + Sync + 'static {
    /// The entity kind this draft materializes into.
    type Entity: EntityKind<Draft = Self>;

    /// Title carried by the draft, if any.
    fn title(&self) -> Option<&str>;

    /// Overwrite the draft title.
    fn set_title(&mut self, title: String);

    /// Apply boundary normalization in place.
    ///
    /// The default implementation substitutes
    /// [`DEFAULT_TITLE`](EntityKind::DEFAULT_TITLE) when the title is
    /// absent or empty. Kinds with enumerated fields layer their coercion
    /// on top.
    fn normalize(&mut self) {
        if self.title().map_or(true, str::is_empty) {
            self.set_title(<Self::Entity as EntityKind>::DEFAULT_TITLE.to_string());
        }
    }

    /// Build a full entity from this draft under a server-assigned id.
    ///
    /// Gateway-side: absent fields take their creation defaults.
    fn materialize(self, id: EntityId) -> Self::Entity;

    /// Overlay the draft's present fields onto an existing entity.
    ///
    /// Gateway-side partial update; absent fields are left untouched.
    fn apply_to(self, entity: &mut Self::Entity);
}
