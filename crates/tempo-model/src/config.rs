//! Client configuration
//!
//! Deliberately small: the timing policies (auth deadline, redirect delay,
//! fake-transcript delay, voice-start delay) are fixed constants in the
//! client crate, not configuration.

use serde::{Deserialize, Serialize};

/// Tunable client strings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Route the guard redirects signed-out visitors to
    pub login_route: String,
    /// Transcript delivered by the simulated voice capture
    pub fake_transcript: String,
    /// Shown when the command processor fails
    pub assistant_failure_message: String,
}

impl ClientConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With login route
    #[inline]
    #[must_use]
    pub fn with_login_route(mut self, route: impl Into<String>) -> Self {
        self.login_route = route.into();
        self
    }

    /// With fake transcript text
    #[inline]
    #[must_use]
    pub fn with_fake_transcript(mut self, transcript: impl Into<String>) -> Self {
        self.fake_transcript = transcript.into();
        self
    }

    /// With assistant failure message
    #[inline]
    #[must_use]
    pub fn with_assistant_failure_message(mut self, message: impl Into<String>) -> Self {
        self.assistant_failure_message = message.into();
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            login_route: "/login".to_string(),
            fake_transcript: "Add a task to review my weekly goals".to_string(),
            assistant_failure_message:
                "Sorry, I couldn't process that request. Please try again.".to_string(),
        }
    }
}
