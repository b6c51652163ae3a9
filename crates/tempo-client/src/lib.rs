//! Tempo client-state core
//!
//! The stateful heart of the productivity client:
//! - [`EntityStore`]: one generic sync engine behind the task, goal,
//!   event, and project collections — remote call, then full refetch,
//!   never an optimistic patch
//! - [`RouteGuard`]: auth-gated rendering with a fixed 5 s deadline
//! - [`DialogContext`]: create/edit dialog coordination
//! - [`AssistantContext`]: AI assistant transcript and simulated voice
//!   capture
//! - [`AppContext`]: all of the above built once at startup and passed by
//!   reference
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use tempo_client::{AppContext, Gateways};
//! use tempo_model::{ClientConfig, TaskDraft};
//! use tempo_remote::{InMemoryGateway, MemoryAuth};
//!
//! # async fn example(processor: Arc<dyn tempo_remote::CommandProcessor>) {
//! let auth = Arc::new(MemoryAuth::signed_in(tempo_model::AuthUser::new("u1")));
//! let app = AppContext::new(auth, Gateways::in_memory(), processor, ClientConfig::new());
//! app.spawn_entity_sync();
//!
//! app.tasks.add(TaskDraft::titled("Water the plants")).await.unwrap();
//! # }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
pub mod app;
pub mod assistant;
pub mod dialog;
pub mod error;
pub mod guard;
pub mod store;

// Re-exports for convenience
pub use app::{AppContext, Gateways, VOICE_START_DELAY};
pub use assistant::{AssistantContext, FAKE_TRANSCRIPT_DELAY};
pub use dialog::{DialogContext, DialogState};
pub use error::{StoreError, TransitionError};
pub use guard::{
    allowed_transitions, validate_transition, GuardState, Rendering, RouteGuard,
    AUTH_CHECK_DEADLINE, REDIRECT_DELAY,
};
pub use store::EntityStore;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the tempo client core
    pub use crate::{
        AppContext, AssistantContext, DialogContext, EntityStore, Gateways, GuardState,
        Rendering, RouteGuard, StoreError,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
