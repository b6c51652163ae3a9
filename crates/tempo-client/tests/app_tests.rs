//! Application context wiring: auth mirroring, guard mounting, voice trigger

use std::sync::Arc;
use std::time::Duration;
use tempo_client::{
    AppContext, Gateways, GuardState, FAKE_TRANSCRIPT_DELAY, VOICE_START_DELAY,
};
use tempo_model::{AuthUser, ClientConfig, EventDraft, GoalDraft, ProjectDraft, TaskDraft};
use tempo_remote::{AuthSource, MemoryAuth};
use tempo_testkit::{test_user, RecordingNavigator, ScriptedProcessor};

fn app_over(auth: Arc<MemoryAuth>) -> Arc<AppContext> {
    AppContext::new(
        auth,
        Gateways::in_memory(),
        Arc::new(ScriptedProcessor::new()),
        ClientConfig::new(),
    )
}

async fn settle() {
    tokio::time::sleep(Duration::from_millis(5)).await;
}

#[tokio::test(start_paused = true)]
async fn sign_in_populates_stores_and_logout_discards_them() {
    let auth = Arc::new(MemoryAuth::loading());
    let app = app_over(auth.clone());
    let _sync = app.spawn_entity_sync();

    auth.resolve(Some(test_user()));
    settle().await;

    app.tasks.add(TaskDraft::titled("task")).await.unwrap();
    app.goals.add(GoalDraft::titled("goal")).await.unwrap();
    app.events.add(EventDraft::titled("event")).await.unwrap();
    app.projects
        .add(ProjectDraft::titled("project").with_status("planning"))
        .await
        .unwrap();

    assert_eq!(app.tasks.snapshot().len(), 1);
    assert_eq!(app.goals.snapshot().len(), 1);
    assert_eq!(app.events.snapshot().len(), 1);
    assert_eq!(app.projects.snapshot().len(), 1);

    auth.logout().await.unwrap();
    settle().await;

    assert!(app.tasks.snapshot().is_empty());
    assert!(app.goals.snapshot().is_empty());
    assert!(app.events.snapshot().is_empty());
    assert!(app.projects.snapshot().is_empty());
    assert_eq!(app.tasks.current_user(), None);
}

#[tokio::test(start_paused = true)]
async fn switching_users_never_leaks_entities_across_accounts() {
    let auth = Arc::new(MemoryAuth::loading());
    let app = app_over(auth.clone());
    let _sync = app.spawn_entity_sync();

    auth.resolve(Some(AuthUser::new("alice")));
    settle().await;
    app.tasks.add(TaskDraft::titled("alice's task")).await.unwrap();
    assert_eq!(app.tasks.snapshot().len(), 1);

    auth.resolve(Some(AuthUser::new("bob")));
    settle().await;
    assert!(app.tasks.snapshot().is_empty());

    auth.resolve(Some(AuthUser::new("alice")));
    settle().await;
    assert_eq!(app.tasks.snapshot().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn protect_mounts_a_guard_over_the_app_auth_source() {
    let auth = Arc::new(MemoryAuth::signed_in(test_user()));
    let app = app_over(auth);

    let navigator = Arc::new(RecordingNavigator::new());
    let guard = app.protect(navigator);
    settle().await;

    assert_eq!(guard.state(), GuardState::Authorized);
    assert!(guard.renders_children());
}

#[tokio::test(start_paused = true)]
async fn voice_trigger_starts_capture_after_the_dialog_delay() {
    let auth = Arc::new(MemoryAuth::signed_in(test_user()));
    let app = app_over(auth);

    app.trigger_voice_capture();
    tokio::time::sleep(VOICE_START_DELAY - Duration::from_millis(100)).await;
    assert!(!app.assistant.is_listening());

    tokio::time::sleep(Duration::from_millis(150)).await;
    assert!(app.assistant.is_listening());

    tokio::time::sleep(FAKE_TRANSCRIPT_DELAY + Duration::from_millis(10)).await;
    assert_eq!(
        app.assistant.transcript(),
        ClientConfig::new().fake_transcript
    );
    assert!(!app.assistant.is_listening());
}
