//! Entity store behavior against honest and misbehaving gateways

use std::sync::Arc;
use std::time::Duration;
use tempo_client::{EntityStore, StoreError};
use tempo_model::{
    EntityKind, Event, EventDraft, Goal, GoalDraft, GoalStatus, Project, ProjectDraft, Task,
    TaskDraft,
};
use tempo_remote::{EntityGateway, GatewayError, InMemoryGateway};
use tempo_testkit::{test_uid, FlakyGateway};

async fn store_with_user<E: EntityKind>() -> EntityStore<E> {
    let store = EntityStore::new(Arc::new(InMemoryGateway::<E>::new()));
    store.on_auth_change(Some(test_uid())).await.unwrap();
    store
}

async fn flaky_store<E: EntityKind>() -> (EntityStore<E>, Arc<FlakyGateway<E>>) {
    let gateway = Arc::new(FlakyGateway::<E>::new());
    let store = EntityStore::new(gateway.clone() as Arc<dyn EntityGateway<E>>);
    store.on_auth_change(Some(test_uid())).await.unwrap();
    (store, gateway)
}

#[tokio::test]
async fn empty_drafts_create_default_titled_entities() {
    let tasks = store_with_user::<Task>().await;
    tasks.add(TaskDraft::default()).await.unwrap();
    assert_eq!(tasks.snapshot()[0].title(), "Untitled Task");

    let goals = store_with_user::<Goal>().await;
    goals.add(GoalDraft::default()).await.unwrap();
    assert_eq!(goals.snapshot()[0].title(), "Untitled Goal");
    assert_eq!(goals.snapshot()[0].status, GoalStatus::Active);

    let events = store_with_user::<Event>().await;
    events.add(EventDraft::default()).await.unwrap();
    assert_eq!(events.snapshot()[0].title(), "Untitled Event");

    let projects = store_with_user::<Project>().await;
    projects.add(ProjectDraft::default()).await.unwrap();
    assert_eq!(projects.snapshot()[0].title(), "Untitled Project");
}

#[tokio::test]
async fn bogus_project_status_is_stored_as_none() {
    let projects = store_with_user::<Project>().await;
    projects
        .add(ProjectDraft::titled("Ship v1").with_status("bogus"))
        .await
        .unwrap();

    let stored = &projects.snapshot()[0];
    assert_eq!(stored.status, None);
    assert!(!stored.completed());
}

#[tokio::test]
async fn update_with_absent_title_substitutes_the_placeholder() {
    let tasks = store_with_user::<Task>().await;
    tasks.add(TaskDraft::titled("Real title")).await.unwrap();
    let id = tasks.snapshot()[0].id.clone();

    // The original overwrote the title with the placeholder on partial
    // updates too; that substitution is part of the contract.
    tasks
        .update_by_id(&id, TaskDraft::default().with_completed(true))
        .await
        .unwrap();

    let updated = &tasks.snapshot()[0];
    assert!(updated.completed);
    assert_eq!(updated.title, "Untitled Task");
}

#[tokio::test]
async fn user_absence_discards_the_cache() {
    let tasks = store_with_user::<Task>().await;
    tasks.add(TaskDraft::titled("A")).await.unwrap();
    tasks.add(TaskDraft::titled("B")).await.unwrap();
    assert_eq!(tasks.snapshot().len(), 2);

    tasks.on_auth_change(None).await.unwrap();
    assert!(tasks.snapshot().is_empty());
    assert_eq!(tasks.current_user(), None);
}

#[tokio::test]
async fn removed_id_never_reappears_after_refresh() {
    let tasks = store_with_user::<Task>().await;
    tasks.add(TaskDraft::titled("keep")).await.unwrap();
    tasks.add(TaskDraft::titled("drop")).await.unwrap();
    let doomed = tasks
        .snapshot()
        .iter()
        .find(|t| t.title == "drop")
        .unwrap()
        .id
        .clone();

    tasks.remove_by_id(&doomed).await.unwrap();
    tasks.refresh().await.unwrap();

    assert!(tasks.snapshot().iter().all(|t| t.id != doomed));
    assert_eq!(tasks.snapshot().len(), 1);
}

#[tokio::test]
async fn refresh_without_user_is_a_noop() {
    let store = EntityStore::<Task>::new(Arc::new(InMemoryGateway::new()));
    store.refresh().await.unwrap();
    assert!(store.snapshot().is_empty());
    assert!(!store.is_loading());
}

#[tokio::test]
async fn mutations_without_user_are_rejected() {
    let store = EntityStore::<Task>::new(Arc::new(InMemoryGateway::new()));
    let err = store.add(TaskDraft::titled("homeless")).await.unwrap_err();
    assert_eq!(err, StoreError::NoActiveUser);
}

#[tokio::test]
async fn failed_create_leaves_the_loading_flag_set() {
    let (tasks, gateway) = flaky_store::<Task>().await;
    gateway.set_fail_create(true);

    let err = tasks.add(TaskDraft::titled("doomed")).await.unwrap_err();
    assert!(matches!(
        err,
        StoreError::Gateway(GatewayError::Unavailable(_))
    ));
    // Known boundary: the flag is only cleared on the success path.
    assert!(tasks.is_loading());
    assert!(tasks.snapshot().is_empty());
}

#[tokio::test]
async fn create_with_failed_refetch_stays_invisible_until_manual_refresh() {
    let (tasks, gateway) = flaky_store::<Task>().await;
    gateway.set_fail_fetch(true);

    let err = tasks.add(TaskDraft::titled("hidden")).await.unwrap_err();
    assert!(matches!(err, StoreError::Gateway(_)));
    assert!(tasks.snapshot().is_empty());
    assert_eq!(gateway.inner().len(&test_uid()), 1);

    gateway.set_fail_fetch(false);
    tasks.refresh().await.unwrap();
    assert_eq!(tasks.snapshot().len(), 1);
    assert_eq!(tasks.snapshot()[0].title, "hidden");
}

// Overlapping mutations are deliberately not serialized; whichever
// refetch resolves last wins the cache. With a stale slow response for
// the first add, the second entity goes missing until the next refresh.
// This pins the non-determinism as a boundary rather than hiding it.
#[tokio::test(start_paused = true)]
async fn racing_adds_may_lose_an_entity_in_the_cache() {
    let (tasks, gateway) = flaky_store::<Task>().await;
    gateway.push_fetch_delay(Duration::from_millis(300));
    gateway.push_fetch_delay(Duration::from_millis(100));

    let (first, second) = tokio::join!(
        tasks.add(TaskDraft::titled("A")),
        tasks.add(TaskDraft::titled("B")),
    );
    first.unwrap();
    second.unwrap();

    // Both writes landed remotely, but the stale refetch resolved last.
    assert_eq!(gateway.inner().len(&test_uid()), 2);
    let titles: Vec<_> = tasks.snapshot().iter().map(|t| t.title.clone()).collect();
    assert_eq!(titles, vec!["A".to_string()]);

    tasks.refresh().await.unwrap();
    assert_eq!(tasks.snapshot().len(), 2);
}
