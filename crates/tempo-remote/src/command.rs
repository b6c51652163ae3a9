//! Command processor trait

use crate::error::CommandError;
use serde::{Deserialize, Serialize};

/// Interpreted result of a natural-language command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandOutcome {
    /// Human-readable reply for the transcript
    pub message: String,
    /// Optional action the client should perform, e.g. `"task.create"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    /// Structured payload accompanying the action
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl CommandOutcome {
    /// Plain reply with no action
    #[must_use]
    pub fn reply(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            action: None,
            data: None,
        }
    }

    /// With an action name
    #[inline]
    #[must_use]
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// With a structured payload
    #[inline]
    #[must_use]
    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }
}

/// Turns free text into a [`CommandOutcome`]
///
/// The real interpreter is an external service; the assistant context only
/// sees this seam.
#[async_trait::async_trait]
pub trait CommandProcessor: Send + Sync {
    /// Interpret one user utterance.
    async fn process(&self, input: &str) -> Result<CommandOutcome, CommandError>;
}
