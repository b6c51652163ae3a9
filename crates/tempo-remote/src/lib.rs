//! Tempo remote seams
//!
//! The backend (auth + per-user document collections) and the AI command
//! interpreter are external collaborators. This crate defines the traits
//! the client consumes:
//! - [`EntityGateway`]: per-kind async CRUD keyed by user id
//! - [`AuthSource`]: watchable session snapshots plus account operations
//! - [`CommandProcessor`]: natural-language command interpretation
//! - [`Navigator`]: the render-layer seam the route guard redirects through
//!
//! plus in-memory implementations ([`InMemoryGateway`], [`MemoryAuth`])
//! that honor the same contracts for tests and local demos.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod auth;
pub mod command;
pub mod error;
pub mod gateway;
pub mod memory;
pub mod navigate;

// Re-exports for convenience
pub use auth::AuthSource;
pub use command::{CommandOutcome, CommandProcessor};
pub use error::{AuthError, CommandError, GatewayError};
pub use gateway::EntityGateway;
pub use memory::{InMemoryGateway, MemoryAuth};
pub use navigate::Navigator;
