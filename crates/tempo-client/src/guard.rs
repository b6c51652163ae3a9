//! Route guard
//!
//! A render-gating state machine that withholds protected content until
//! authentication resolves. The transition table is pure and small; an
//! async driver walks it from watch-channel auth snapshots.
//!
//! ```text
//! Initial -> Checking -> { Authorized, Redirecting, TimedOut }
//! ```
//!
//! The 5 s deadline is wall-clock from mount and deliberately independent
//! of the auth request lifecycle: it changes what is rendered, it cancels
//! nothing. `TimedOut` is terminal for the mount — a session that resolves
//! afterwards does not un-render the timeout notice.

use crate::error::TransitionError;
use std::sync::Arc;
use std::time::Duration;
use tempo_model::AuthSnapshot;
use tempo_remote::Navigator;
use tokio::sync::watch;

/// Fixed wall-clock deadline for the auth check
pub const AUTH_CHECK_DEADLINE: Duration = Duration::from_secs(5);

/// Delay before the signed-out redirect is issued
pub const REDIRECT_DELAY: Duration = Duration::from_millis(100);

/// Guard lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuardState {
    /// Mounted, auth not yet inspected
    Initial,
    /// Auth check in flight
    Checking,
    /// User present; children render
    Authorized,
    /// No user; navigation to the login route is scheduled
    Redirecting,
    /// Deadline fired while the check was still in flight
    TimedOut,
}

impl GuardState {
    /// Whether this state ends the mount cycle
    #[inline]
    #[must_use]
    pub fn is_terminal(self) -> bool {
        allowed_transitions(self).is_empty()
    }
}

/// What the guard puts on screen for a given state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rendering {
    /// Checking spinner
    Spinner,
    /// The protected content
    Children,
    /// Nothing (redirect pending)
    Nothing,
    /// Timeout notice with a manual return-to-login affordance
    TimeoutNotice,
}

impl Rendering {
    /// Children render iff the state is `Authorized`.
    #[must_use]
    pub fn for_state(state: GuardState) -> Self {
        match state {
            GuardState::Initial | GuardState::Checking => Rendering::Spinner,
            GuardState::Authorized => Rendering::Children,
            GuardState::Redirecting => Rendering::Nothing,
            GuardState::TimedOut => Rendering::TimeoutNotice,
        }
    }
}

/// States reachable from `from` in one step
#[must_use]
pub fn allowed_transitions(from: GuardState) -> Vec<GuardState> {
    use GuardState::*;
    match from {
        Initial => vec![Checking, Authorized, Redirecting],
        Checking => vec![Authorized, Redirecting, TimedOut],
        Authorized => vec![],
        Redirecting => vec![],
        TimedOut => vec![],
    }
}

/// Validates a state transition.
pub fn validate_transition(from: GuardState, to: GuardState) -> Result<(), TransitionError> {
    if allowed_transitions(from).contains(&to) {
        Ok(())
    } else {
        Err(TransitionError { from, to })
    }
}

/// A mounted guard instance
///
/// [`mount`](RouteGuard::mount) spawns the driver for one mount cycle;
/// the handle only observes. Once the driver reaches a terminal state it
/// stops consuming auth snapshots, so a later `user = None` cannot
/// retroactively revert `Authorized` within the same mount.
#[derive(Debug)]
pub struct RouteGuard {
    state_rx: watch::Receiver<GuardState>,
}

impl RouteGuard {
    /// Mount the guard over an auth snapshot channel.
    #[must_use]
    pub fn mount(
        auth: watch::Receiver<AuthSnapshot>,
        navigator: Arc<dyn Navigator>,
        login_route: impl Into<String>,
    ) -> Self {
        let (tx, rx) = watch::channel(GuardState::Initial);
        tokio::spawn(drive(tx, auth, navigator, login_route.into()));
        Self { state_rx: rx }
    }

    /// Current state
    #[must_use]
    pub fn state(&self) -> GuardState {
        *self.state_rx.borrow()
    }

    /// Current render decision
    #[must_use]
    pub fn rendering(&self) -> Rendering {
        Rendering::for_state(self.state())
    }

    /// Shorthand: is the protected content visible?
    #[must_use]
    pub fn renders_children(&self) -> bool {
        self.rendering() == Rendering::Children
    }

    /// Watch state changes (tests and render integration)
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<GuardState> {
        self.state_rx.clone()
    }
}

async fn drive(
    state: watch::Sender<GuardState>,
    mut auth: watch::Receiver<AuthSnapshot>,
    navigator: Arc<dyn Navigator>,
    login_route: String,
) {
    let deadline = tokio::time::sleep(AUTH_CHECK_DEADLINE);
    tokio::pin!(deadline);

    loop {
        let snapshot = auth.borrow().clone();
        if !snapshot.is_loading {
            match snapshot.user {
                Some(user) => {
                    tracing::debug!(uid = %user.uid, "auth resolved, authorizing");
                    step(&state, GuardState::Authorized);
                }
                None => {
                    tracing::debug!("auth resolved with no user, redirecting");
                    step(&state, GuardState::Redirecting);
                    tokio::time::sleep(REDIRECT_DELAY).await;
                    navigator.navigate(&login_route);
                }
            }
            return;
        }

        step(&state, GuardState::Checking);
        tokio::select! {
            () = &mut deadline => {
                tracing::warn!(
                    deadline_secs = AUTH_CHECK_DEADLINE.as_secs(),
                    "auth check exceeded deadline"
                );
                step(&state, GuardState::TimedOut);
                return;
            }
            changed = auth.changed() => {
                if changed.is_err() {
                    tracing::warn!("auth source dropped while checking");
                    return;
                }
            }
        }
    }
}

fn step(state: &watch::Sender<GuardState>, to: GuardState) {
    let from = *state.borrow();
    if from == to {
        return;
    }
    match validate_transition(from, to) {
        Ok(()) => {
            state.send_replace(to);
        }
        Err(e) => tracing::error!(%e, "refusing guard transition"),
    }
}
