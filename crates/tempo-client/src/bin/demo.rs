//! Scripted demo session against the in-memory backend
//!
//! Run with `RUST_LOG=debug cargo run --bin tempo-demo` to watch the
//! sync, guard, and assistant flows.

use std::sync::Arc;
use std::time::Duration;
use tempo_client::{AppContext, Gateways, FAKE_TRANSCRIPT_DELAY, VOICE_START_DELAY};
use tempo_model::{AuthUser, ClientConfig, GoalDraft, ProjectDraft, TaskDraft};
use tempo_remote::{
    AuthSource, CommandError, CommandOutcome, CommandProcessor, MemoryAuth, Navigator,
};
use tracing_subscriber::EnvFilter;

struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate(&self, route: &str) {
        tracing::info!(route, "navigating");
    }
}

/// Keyword-matching stand-in for the real command interpreter
struct KeywordProcessor;

#[async_trait::async_trait]
impl CommandProcessor for KeywordProcessor {
    async fn process(&self, input: &str) -> Result<CommandOutcome, CommandError> {
        let lower = input.to_lowercase();
        let wants_create =
            lower.contains("add") || lower.contains("create") || lower.contains("new");
        let outcome = if wants_create && lower.contains("task") {
            CommandOutcome::reply("Sure - I've added that task for you.")
                .with_action("task.create")
                .with_data(serde_json::json!({ "title": input }))
        } else if wants_create && lower.contains("goal") {
            CommandOutcome::reply("New goal, noted.")
                .with_action("goal.create")
                .with_data(serde_json::json!({ "title": input }))
        } else if lower.contains("schedule") || lower.contains("event") {
            CommandOutcome::reply("I've put that on your calendar.").with_action("event.create")
        } else {
            CommandOutcome::reply(
                "I can add tasks, goals, events, and projects. Try \"add a task\".",
            )
        };
        Ok(outcome)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let auth = Arc::new(MemoryAuth::loading());
    let app = AppContext::new(
        auth.clone(),
        Gateways::in_memory(),
        Arc::new(KeywordProcessor),
        ClientConfig::new(),
    );
    let sync = app.spawn_entity_sync();

    // Mount a protected page while the session check is still in flight,
    // then resolve it.
    let guard = app.protect(Arc::new(LogNavigator));
    auth.resolve(Some(AuthUser::new("demo-user").with_email("demo@example.com")));

    let mut guard_states = guard.subscribe();
    while !guard.state().is_terminal() {
        if guard_states.changed().await.is_err() {
            break;
        }
    }
    tracing::info!(state = ?guard.state(), rendering = ?guard.rendering(), "guard settled");

    // A few mutations; each one is a remote call plus a full refetch.
    app.tasks.add(TaskDraft::titled("Water the plants")).await?;
    app.tasks.add(TaskDraft::default()).await?; // lands as "Untitled Task"
    app.goals
        .add(GoalDraft::titled("Run a 10k").with_progress(20))
        .await?;
    app.projects
        .add(ProjectDraft::titled("Garden redesign").with_status("planning"))
        .await?;
    tracing::info!(
        tasks = app.tasks.snapshot().len(),
        goals = app.goals.snapshot().len(),
        projects = app.projects.snapshot().len(),
        "collections after seeding"
    );

    // Assistant round trip.
    let reply = app.assistant.send("Add a task to buy compost").await;
    tracing::info!(reply = %reply.text, action = ?reply.action, "assistant replied");

    // Simulated voice capture: 500 ms trigger delay, 3 s to transcript.
    app.trigger_voice_capture();
    tokio::time::sleep(VOICE_START_DELAY + FAKE_TRANSCRIPT_DELAY + Duration::from_millis(50))
        .await;
    tracing::info!(transcript = %app.assistant.transcript(), "voice transcript delivered");

    // Logout discards every cached collection.
    auth.logout().await?;
    tokio::time::sleep(Duration::from_millis(50)).await;
    tracing::info!(
        tasks = app.tasks.snapshot().len(),
        goals = app.goals.snapshot().len(),
        "collections after logout"
    );

    sync.abort();
    Ok(())
}
