//! Testing utilities for the tempo workspace
//!
//! Shared test helpers, fixtures, and failure-injecting doubles.

#![allow(missing_docs)]

use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tempo_model::{AuthUser, EntityId, EntityKind, UserId};
use tempo_remote::{
    CommandError, CommandOutcome, CommandProcessor, EntityGateway, GatewayError, InMemoryGateway,
    Navigator,
};

/// Standard test account
pub fn test_user() -> AuthUser {
    AuthUser::new("test-user").with_email("test@example.com")
}

/// Uid of the standard test account
pub fn test_uid() -> UserId {
    UserId::from("test-user")
}

/// In-memory gateway with injectable failures and stale-read delays
///
/// A queued fetch delay makes `fetch_all` take its snapshot at call time
/// and only return it after the delay — exactly the stale-read window
/// that lets racing refreshes lose a mutation.
pub struct FlakyGateway<E: EntityKind> {
    inner: InMemoryGateway<E>,
    fail_fetch: AtomicBool,
    fail_create: AtomicBool,
    fail_update: AtomicBool,
    fail_delete: AtomicBool,
    fetch_delays: Mutex<VecDeque<Duration>>,
}

impl<E: EntityKind> FlakyGateway<E> {
    pub fn new() -> Self {
        Self {
            inner: InMemoryGateway::new(),
            fail_fetch: AtomicBool::new(false),
            fail_create: AtomicBool::new(false),
            fail_update: AtomicBool::new(false),
            fail_delete: AtomicBool::new(false),
            fetch_delays: Mutex::new(VecDeque::new()),
        }
    }

    /// The backing store, for seeding and direct assertions
    pub fn inner(&self) -> &InMemoryGateway<E> {
        &self.inner
    }

    pub fn set_fail_fetch(&self, fail: bool) {
        self.fail_fetch.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_create(&self, fail: bool) {
        self.fail_create.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_update(&self, fail: bool) {
        self.fail_update.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_delete(&self, fail: bool) {
        self.fail_delete.store(fail, Ordering::SeqCst);
    }

    /// Queue a delay consumed by the next `fetch_all` call
    pub fn push_fetch_delay(&self, delay: Duration) {
        self.fetch_delays.lock().push_back(delay);
    }

    fn injected(&self, flag: &AtomicBool, operation: &str) -> Result<(), GatewayError> {
        if flag.load(Ordering::SeqCst) {
            Err(GatewayError::Unavailable(format!(
                "injected {operation} failure"
            )))
        } else {
            Ok(())
        }
    }
}

impl<E: EntityKind> Default for FlakyGateway<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl<E: EntityKind> EntityGateway<E> for FlakyGateway<E> {
    async fn fetch_all(&self, user: &UserId) -> Result<Vec<E>, GatewayError> {
        self.injected(&self.fail_fetch, "fetch")?;
        let delay = self.fetch_delays.lock().pop_front();
        // Snapshot first, then stall: a delayed response reflects the
        // collection as it was when the request went out.
        let snapshot = self.inner.fetch_all(user).await?;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        Ok(snapshot)
    }

    async fn create(&self, draft: E::Draft, user: &UserId) -> Result<E, GatewayError> {
        self.injected(&self.fail_create, "create")?;
        self.inner.create(draft, user).await
    }

    async fn update(
        &self,
        id: &EntityId,
        draft: E::Draft,
        user: &UserId,
    ) -> Result<E, GatewayError> {
        self.injected(&self.fail_update, "update")?;
        self.inner.update(id, draft, user).await
    }

    async fn delete(&self, id: &EntityId, user: &UserId) -> Result<(), GatewayError> {
        self.injected(&self.fail_delete, "delete")?;
        self.inner.delete(id, user).await
    }
}

/// Records every navigation the guard issues
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn routes(&self) -> Vec<String> {
        self.routes.lock().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: &str) {
        self.routes.lock().push(route.to_string());
    }
}

/// Command processor answering from a scripted reply queue
///
/// Each queued reply may carry a delay, which is how overlap tests hold
/// one call in flight while another completes. An empty queue echoes the
/// input.
pub struct ScriptedProcessor {
    replies: Mutex<VecDeque<(Result<CommandOutcome, CommandError>, Duration)>>,
}

impl ScriptedProcessor {
    pub fn new() -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
        }
    }

    pub fn push_reply(&self, outcome: CommandOutcome) {
        self.push_reply_after(outcome, Duration::ZERO);
    }

    pub fn push_reply_after(&self, outcome: CommandOutcome, delay: Duration) {
        self.replies.lock().push_back((Ok(outcome), delay));
    }

    pub fn push_failure(&self, error: CommandError) {
        self.push_failure_after(error, Duration::ZERO);
    }

    pub fn push_failure_after(&self, error: CommandError, delay: Duration) {
        self.replies.lock().push_back((Err(error), delay));
    }
}

impl Default for ScriptedProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl CommandProcessor for ScriptedProcessor {
    async fn process(&self, input: &str) -> Result<CommandOutcome, CommandError> {
        let scripted = self.replies.lock().pop_front();
        match scripted {
            Some((outcome, delay)) => {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                outcome
            }
            None => Ok(CommandOutcome::reply(format!("echo: {input}"))),
        }
    }
}
