//! Route guard state machine, driven with a fake clock

use proptest::prelude::*;
use std::sync::Arc;
use std::time::Duration;
use tempo_client::{
    allowed_transitions, validate_transition, GuardState, Rendering, RouteGuard,
    AUTH_CHECK_DEADLINE, REDIRECT_DELAY,
};
use tempo_remote::{AuthSource, MemoryAuth};
use tempo_testkit::{test_user, RecordingNavigator};

fn mount(auth: &MemoryAuth) -> (RouteGuard, Arc<RecordingNavigator>) {
    let navigator = Arc::new(RecordingNavigator::new());
    let guard = RouteGuard::mount(auth.subscribe(), navigator.clone(), "/login");
    (guard, navigator)
}

async fn settle() {
    // Lets the spawned driver observe the latest snapshot.
    tokio::time::sleep(Duration::from_millis(1)).await;
}

#[tokio::test(start_paused = true)]
async fn unresolved_auth_times_out_at_the_deadline() {
    let auth = MemoryAuth::loading();
    let (guard, navigator) = mount(&auth);

    settle().await;
    assert_eq!(guard.state(), GuardState::Checking);
    assert_eq!(guard.rendering(), Rendering::Spinner);

    tokio::time::sleep(AUTH_CHECK_DEADLINE + Duration::from_millis(10)).await;
    assert_eq!(guard.state(), GuardState::TimedOut);
    assert_eq!(guard.rendering(), Rendering::TimeoutNotice);
    assert!(navigator.routes().is_empty());

    // TimedOut is terminal: a session resolving afterwards changes nothing.
    auth.resolve(Some(test_user()));
    settle().await;
    assert_eq!(guard.state(), GuardState::TimedOut);
    assert!(!guard.renders_children());
}

#[tokio::test(start_paused = true)]
async fn resolving_with_a_user_authorizes() {
    let auth = MemoryAuth::loading();
    let (guard, _navigator) = mount(&auth);

    tokio::time::sleep(Duration::from_secs(1)).await;
    assert_eq!(guard.state(), GuardState::Checking);

    auth.resolve(Some(test_user()));
    settle().await;
    assert_eq!(guard.state(), GuardState::Authorized);
    assert!(guard.renders_children());

    // The mount cycle is over; a later signed-out snapshot does not
    // retroactively revert rendering.
    auth.resolve(None);
    settle().await;
    assert_eq!(guard.state(), GuardState::Authorized);
    assert!(guard.renders_children());
}

#[tokio::test(start_paused = true)]
async fn resolving_without_a_user_redirects_after_the_delay() {
    let auth = MemoryAuth::loading();
    let (guard, navigator) = mount(&auth);

    settle().await;
    auth.resolve(None);
    settle().await;
    assert_eq!(guard.state(), GuardState::Redirecting);
    assert_eq!(guard.rendering(), Rendering::Nothing);
    assert!(navigator.routes().is_empty());

    tokio::time::sleep(REDIRECT_DELAY + Duration::from_millis(10)).await;
    assert_eq!(navigator.routes(), vec!["/login".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn already_resolved_auth_authorizes_immediately() {
    let auth = MemoryAuth::signed_in(test_user());
    let (guard, _navigator) = mount(&auth);

    settle().await;
    assert_eq!(guard.state(), GuardState::Authorized);
}

#[tokio::test(start_paused = true)]
async fn deadline_does_not_fire_after_authorization() {
    let auth = MemoryAuth::loading();
    let (guard, _navigator) = mount(&auth);

    tokio::time::sleep(Duration::from_secs(2)).await;
    auth.resolve(Some(test_user()));
    settle().await;
    assert_eq!(guard.state(), GuardState::Authorized);

    // Well past the 5 s mark; the settled state must hold.
    tokio::time::sleep(AUTH_CHECK_DEADLINE).await;
    assert_eq!(guard.state(), GuardState::Authorized);
}

#[test]
fn children_render_iff_authorized() {
    for state in [
        GuardState::Initial,
        GuardState::Checking,
        GuardState::Authorized,
        GuardState::Redirecting,
        GuardState::TimedOut,
    ] {
        let renders = Rendering::for_state(state) == Rendering::Children;
        assert_eq!(renders, state == GuardState::Authorized);
    }
}

#[test]
fn resolved_states_are_terminal() {
    assert!(GuardState::Authorized.is_terminal());
    assert!(GuardState::Redirecting.is_terminal());
    assert!(GuardState::TimedOut.is_terminal());
    assert!(!GuardState::Initial.is_terminal());
    assert!(!GuardState::Checking.is_terminal());
}

fn any_state() -> impl Strategy<Value = GuardState> {
    prop_oneof![
        Just(GuardState::Initial),
        Just(GuardState::Checking),
        Just(GuardState::Authorized),
        Just(GuardState::Redirecting),
        Just(GuardState::TimedOut),
    ]
}

proptest! {
    #[test]
    fn prop_validation_agrees_with_the_table(from in any_state(), to in any_state()) {
        let result = validate_transition(from, to);
        let allowed = allowed_transitions(from);

        if result.is_ok() {
            prop_assert!(allowed.contains(&to));
        } else {
            prop_assert!(!allowed.contains(&to));
        }
    }
}
