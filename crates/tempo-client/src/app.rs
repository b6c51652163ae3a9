//! Application context
//!
//! The original shipped these contexts as seven nested ambient providers;
//! here they are one explicit object built at startup and passed by
//! reference. `AppContext` owns the four entity stores, the three dialog
//! contexts, and the assistant, and runs the auth-mirroring loop that
//! populates or discards every store on identity changes.

use crate::assistant::AssistantContext;
use crate::dialog::DialogContext;
use crate::guard::RouteGuard;
use crate::store::EntityStore;
use std::sync::Arc;
use std::time::Duration;
use tempo_model::{ClientConfig, Event, Goal, Project, Task, UserId};
use tempo_remote::{
    AuthSource, CommandProcessor, EntityGateway, InMemoryGateway, Navigator,
};
use tokio::task::JoinHandle;

/// Delay between a dialog voice trigger and the start of capture
pub const VOICE_START_DELAY: Duration = Duration::from_millis(500);

/// One gateway per entity kind
pub struct Gateways {
    pub tasks: Arc<dyn EntityGateway<Task>>,
    pub goals: Arc<dyn EntityGateway<Goal>>,
    pub events: Arc<dyn EntityGateway<Event>>,
    pub projects: Arc<dyn EntityGateway<Project>>,
}

impl Gateways {
    /// All four kinds backed by fresh in-memory collections
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            tasks: Arc::new(InMemoryGateway::<Task>::new()),
            goals: Arc::new(InMemoryGateway::<Goal>::new()),
            events: Arc::new(InMemoryGateway::<Event>::new()),
            projects: Arc::new(InMemoryGateway::<Project>::new()),
        }
    }
}

/// Everything the client's stateful layer needs, built once
pub struct AppContext {
    config: ClientConfig,
    auth: Arc<dyn AuthSource>,
    /// Task collection
    pub tasks: Arc<EntityStore<Task>>,
    /// Goal collection
    pub goals: Arc<EntityStore<Goal>>,
    /// Event collection
    pub events: Arc<EntityStore<Event>>,
    /// Project collection
    pub projects: Arc<EntityStore<Project>>,
    /// Task create/edit dialog
    pub task_dialog: DialogContext<Task>,
    /// Event create/edit dialog
    pub event_dialog: DialogContext<Event>,
    /// Goal create/edit dialog
    pub goal_dialog: DialogContext<Goal>,
    /// AI assistant
    pub assistant: AssistantContext,
}

impl AppContext {
    /// Assemble the context; nothing is fetched until
    /// [`spawn_entity_sync`](Self::spawn_entity_sync) runs and a user
    /// appears.
    #[must_use]
    pub fn new(
        auth: Arc<dyn AuthSource>,
        gateways: Gateways,
        processor: Arc<dyn CommandProcessor>,
        config: ClientConfig,
    ) -> Arc<Self> {
        let assistant = AssistantContext::new(processor, &config);
        Arc::new(Self {
            config,
            auth,
            tasks: Arc::new(EntityStore::new(gateways.tasks)),
            goals: Arc::new(EntityStore::new(gateways.goals)),
            events: Arc::new(EntityStore::new(gateways.events)),
            projects: Arc::new(EntityStore::new(gateways.projects)),
            task_dialog: DialogContext::new(),
            event_dialog: DialogContext::new(),
            goal_dialog: DialogContext::new(),
            assistant,
        })
    }

    /// Auth source handle
    #[must_use]
    pub fn auth(&self) -> &Arc<dyn AuthSource> {
        &self.auth
    }

    /// Client configuration
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Run the auth-mirroring loop: on every identity change, every store
    /// is populated (user present) or discarded (user absent). A store
    /// whose refetch fails stays stale until the next change or manual
    /// refresh; the failure is logged, not retried.
    pub fn spawn_entity_sync(self: &Arc<Self>) -> JoinHandle<()> {
        let this = Arc::clone(self);
        tokio::spawn(async move {
            let mut auth_rx = this.auth.subscribe();
            let mut last_uid: Option<UserId> = None;
            loop {
                let uid = auth_rx.borrow().uid();
                if uid != last_uid {
                    last_uid = uid.clone();
                    this.apply_auth_change(uid).await;
                }
                if auth_rx.changed().await.is_err() {
                    tracing::warn!("auth source dropped, entity sync stopping");
                    return;
                }
            }
        })
    }

    /// Mount a route guard for one protected render cycle.
    #[must_use]
    pub fn protect(&self, navigator: Arc<dyn Navigator>) -> RouteGuard {
        RouteGuard::mount(
            self.auth.subscribe(),
            navigator,
            self.config.login_route.clone(),
        )
    }

    /// Voice affordance on the assistant dialog: capture starts
    /// [`VOICE_START_DELAY`] after the trigger.
    pub fn trigger_voice_capture(&self) {
        let assistant = self.assistant.clone();
        tokio::spawn(async move {
            tokio::time::sleep(VOICE_START_DELAY).await;
            assistant.start_listening();
        });
    }

    async fn apply_auth_change(&self, uid: Option<UserId>) {
        tracing::info!(user = ?uid, "auth identity changed");
        if let Err(e) = self.tasks.on_auth_change(uid.clone()).await {
            tracing::warn!(error = %e, "task sync failed");
        }
        if let Err(e) = self.goals.on_auth_change(uid.clone()).await {
            tracing::warn!(error = %e, "goal sync failed");
        }
        if let Err(e) = self.events.on_auth_change(uid.clone()).await {
            tracing::warn!(error = %e, "event sync failed");
        }
        if let Err(e) = self.projects.on_auth_change(uid).await {
            tracing::warn!(error = %e, "project sync failed");
        }
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("tasks", &self.tasks)
            .field("goals", &self.goals)
            .field("events", &self.events)
            .field("projects", &self.projects)
            .field("assistant", &self.assistant)
            .finish()
    }
}
