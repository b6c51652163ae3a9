//! AI assistant context
//!
//! Holds the transcript, the message list, and the simulated voice
//! capture state. Interpretation is delegated to the external
//! [`CommandProcessor`]; a processor failure becomes a generic failure
//! reply in the transcript, never an error out of `send`.
//!
//! Each `send` call mints its own placeholder id, so overlapping calls
//! can never resolve each other's typing placeholders.

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tempo_model::{ClientConfig, Message, MessageId};
use tempo_remote::CommandProcessor;

/// Delay before the simulated voice capture delivers its transcript
pub const FAKE_TRANSCRIPT_DELAY: Duration = Duration::from_secs(3);

#[derive(Debug, Default)]
struct AssistantState {
    is_listening: bool,
    transcript: String,
    messages: Vec<Message>,
}

/// Assistant transcript + voice capture state
///
/// Cheap to clone; clones share the same state.
#[derive(Clone)]
pub struct AssistantContext {
    state: Arc<Mutex<AssistantState>>,
    processor: Arc<dyn CommandProcessor>,
    fake_transcript: String,
    failure_message: String,
}

impl AssistantContext {
    /// Empty transcript over a command processor
    #[must_use]
    pub fn new(processor: Arc<dyn CommandProcessor>, config: &ClientConfig) -> Self {
        Self {
            state: Arc::new(Mutex::new(AssistantState::default())),
            processor,
            fake_transcript: config.fake_transcript.clone(),
            failure_message: config.assistant_failure_message.clone(),
        }
    }

    /// Current message list
    #[must_use]
    pub fn messages(&self) -> Vec<Message> {
        self.state.lock().messages.clone()
    }

    /// Current voice transcript
    #[must_use]
    pub fn transcript(&self) -> String {
        self.state.lock().transcript.clone()
    }

    /// Whether voice capture is (simulated as) running
    #[must_use]
    pub fn is_listening(&self) -> bool {
        self.state.lock().is_listening
    }

    /// Begin simulated voice capture: clears the transcript, then a
    /// spawned task delivers the fixed fake transcript after
    /// [`FAKE_TRANSCRIPT_DELAY`] and stops listening.
    pub fn start_listening(&self) {
        {
            let mut state = self.state.lock();
            state.is_listening = true;
            state.transcript.clear();
        }
        tracing::debug!("voice capture started (simulated)");

        let this = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(FAKE_TRANSCRIPT_DELAY).await;
            let mut state = this.state.lock();
            if !state.is_listening {
                // Capture was stopped manually; drop the fake transcript.
                return;
            }
            state.transcript = this.fake_transcript.clone();
            state.is_listening = false;
        });
    }

    /// Stop simulated voice capture without a transcript.
    pub fn stop_listening(&self) {
        self.state.lock().is_listening = false;
    }

    /// Send a user message through the command processor.
    ///
    /// Appends the user message and a typing placeholder, awaits
    /// interpretation, then resolves the placeholder in place with the
    /// reply — or with the generic failure message if the processor
    /// errs. Returns the resolved assistant message.
    pub async fn send(&self, text: impl Into<String>) -> Message {
        let text = text.into();
        let placeholder = MessageId::new();
        {
            let mut state = self.state.lock();
            state.messages.push(Message::user(text.clone()));
            state.messages.push(Message::typing(placeholder));
        }
        tracing::debug!(%placeholder, "interpreting command");

        let (reply, action, data) = match self.processor.process(&text).await {
            Ok(outcome) => (outcome.message, outcome.action, outcome.data),
            Err(e) => {
                tracing::warn!(error = %e, "command processor failed");
                (self.failure_message.clone(), None, None)
            }
        };

        let mut state = self.state.lock();
        if let Some(slot) = state.messages.iter_mut().find(|m| m.id == placeholder) {
            slot.resolve(reply, action, data);
            return slot.clone();
        }
        // Only reachable if the transcript was torn down mid-flight.
        tracing::error!(%placeholder, "typing placeholder vanished before resolution");
        let mut message = Message::typing(placeholder);
        message.resolve(reply, action, data);
        state.messages.push(message.clone());
        message
    }
}

impl std::fmt::Debug for AssistantContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock();
        f.debug_struct("AssistantContext")
            .field("is_listening", &state.is_listening)
            .field("transcript", &state.transcript)
            .field("messages", &state.messages.len())
            .finish()
    }
}
