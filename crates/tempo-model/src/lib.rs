//! Tempo data model
//!
//! The shared vocabulary of the client-state layer:
//! - The four user-scoped entity kinds (tasks, goals, events, projects)
//!   and their partial drafts
//! - Opaque identifiers for entities, users, and assistant messages
//! - Auth session snapshots
//! - Assistant transcript messages
//! - Client configuration

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod auth;
pub mod config;
pub mod entity;
pub mod event;
pub mod goal;
pub mod ids;
pub mod message;
pub mod project;
pub mod task;

// Re-exports for convenience
pub use auth::{AuthSnapshot, AuthUser};
pub use config::ClientConfig;
pub use entity::{EntityDraft, EntityKind};
pub use event::{Event, EventDraft};
pub use goal::{Goal, GoalDraft, GoalStatus};
pub use ids::{EntityId, MessageId, UserId};
pub use message::{Message, MessageRole};
pub use project::{Project, ProjectDraft, ProjectStatus, UnknownStatus};
pub use task::{Task, TaskDraft};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the tempo model
    pub use crate::{
        AuthSnapshot, AuthUser, ClientConfig, EntityDraft, EntityId, EntityKind, Event,
        EventDraft, Goal, GoalDraft, GoalStatus, Message, MessageId, MessageRole, Project,
        ProjectDraft, ProjectStatus, Task, TaskDraft, UserId,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
