// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use futures_util::stream;
use pretty_assertions::assert_eq;
use r3bl_todo_redux::{Item, NotifyPolicy, RawAction, RawPayload, StoreConfig, StoreError,
                      TodoAction, TodoState, TodoStore, reduce};

fn seed() -> TodoState { TodoState::from_descriptions(["a", "b"]) }

#[derive(Debug, thiserror::Error)]
#[error("keyboard unplugged")]
struct KeyboardUnplugged;

#[tokio::test]
async fn test_scenario_and_late_subscriber_replay() {
    let store = TodoStore::new(seed());

    store.create_item("c").unwrap();
    assert_eq!(store.get_state().await.unwrap().descriptions(), ["a", "b", "c"]);

    store.remove_item("b").unwrap();
    assert_eq!(store.get_state().await.unwrap().descriptions(), ["a", "c"]);

    store.remove_item("z").unwrap();
    assert_eq!(store.get_state().await.unwrap().descriptions(), ["a", "c"]);

    // No further dispatch is needed to see the current list.
    let mut late = store.subscribe_channel().unwrap();
    let replay = late.recv().await.unwrap();
    assert_eq!(replay.items, vec![Item::new("a"), Item::new("c")]);
    assert_eq!(late.try_recv(), None);
}

#[tokio::test]
async fn test_subscriber_sees_replay_then_every_fold() {
    let store = TodoStore::new(seed());
    let mut items = store.subscribe_channel().unwrap();

    store.create_item("c").unwrap();
    store.remove_item("z").unwrap();
    store.remove_item("a").unwrap();

    assert_eq!(items.recv().await.unwrap().descriptions(), ["a", "b"]);
    assert_eq!(items.recv().await.unwrap().descriptions(), ["a", "b", "c"]);
    // Unchanged by value, still delivered.
    assert_eq!(items.recv().await.unwrap().descriptions(), ["a", "b", "c"]);
    assert_eq!(items.recv().await.unwrap().descriptions(), ["b", "c"]);

    drop(store);
    // The last handle is gone, so the actor stops and the channel closes.
    assert_eq!(items.recv().await, None);
}

#[tokio::test]
async fn test_order_preservation_matches_pure_fold() {
    let store = TodoStore::new(seed());
    let create_channel = store.handle();
    let remove_channel = store.handle();

    let actions = [
        TodoAction::create("x"),
        TodoAction::create("y"),
        TodoAction::remove("a"),
        TodoAction::create("x"),
        TodoAction::remove("y"),
        TodoAction::create("a"),
        TodoAction::remove("nope"),
        TodoAction::create("z"),
    ];
    for action in &actions {
        let result = match action {
            TodoAction::Create(item) => create_channel.create_item(&item.description),
            TodoAction::Remove(description) => remove_channel.remove_item(description),
            TodoAction::Unrecognized { .. } => create_channel.dispatch(action.clone()),
        };
        result.unwrap();
    }

    let expected = actions
        .iter()
        .fold(seed(), |state, action| reduce(&state, action));
    assert_eq!(store.shutdown().await.unwrap(), expected);
    assert_eq!(expected.descriptions(), ["b", "x", "x", "a", "z"]);
}

#[tokio::test]
async fn test_create_twice_then_remove_removes_both() {
    let store = TodoStore::new(TodoState::default());

    store.create_item("x").unwrap();
    store.create_item("x").unwrap();
    assert_eq!(store.get_state().await.unwrap().descriptions(), ["x", "x"]);

    store.remove_item("x").unwrap();
    assert!(store.get_state().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_unknown_raw_action_is_a_no_op() {
    let store = TodoStore::new(seed());

    store
        .dispatch_json(r#"{"actionType": "TOGGLE_TASK", "payload": "a"}"#)
        .unwrap();
    store
        .dispatch_raw(RawAction {
            action_type: "ADD_TASK".to_string(),
            payload: RawPayload::Description("c".to_string()),
        })
        .unwrap();

    assert_eq!(store.get_state().await.unwrap().descriptions(), ["a", "b", "c"]);

    let result = store.dispatch_json("not json");
    assert!(matches!(result, Err(StoreError::MalformedAction(_))));
    assert_eq!(store.get_state().await.unwrap().descriptions(), ["a", "b", "c"]);
}

#[tokio::test]
async fn test_sources_are_merged_preserving_per_source_order() {
    let store = TodoStore::new(TodoState::default());

    let left = stream::iter(
        ["l1", "l2", "l3"].map(|it| Ok::<_, KeyboardUnplugged>(TodoAction::create(it))),
    );
    let right = stream::iter(
        ["r1", "r2"].map(|it| Ok::<_, KeyboardUnplugged>(TodoAction::create(it))),
    );
    let left = store.attach_source("left", left);
    let right = store.attach_source("right", right);
    left.await.unwrap();
    right.await.unwrap();

    let state = store.shutdown().await.unwrap();
    let descriptions = state.descriptions();
    assert_eq!(descriptions.len(), 5);

    let from = |prefix: char| {
        descriptions
            .iter()
            .copied()
            .filter(|it| it.starts_with(prefix))
            .collect::<Vec<_>>()
    };
    assert_eq!(from('l'), ["l1", "l2", "l3"]);
    assert_eq!(from('r'), ["r1", "r2"]);
}

#[tokio::test]
async fn test_failed_source_freezes_the_pipeline() {
    let store = TodoStore::new(seed());
    let handle = store.handle();
    let mut items = store.subscribe_channel().unwrap();

    let source = stream::iter(vec![
        Ok(TodoAction::create("c")),
        Err(KeyboardUnplugged),
        Ok(TodoAction::create("never")),
    ]);
    store.attach_source("keyboard", source).await.unwrap();

    assert!(matches!(
        store.shutdown().await,
        Err(StoreError::SourceFailed { label, .. }) if label == "keyboard"
    ));

    // Replay, the one action before the failure, then nothing.
    assert_eq!(items.recv().await.unwrap().descriptions(), ["a", "b"]);
    assert_eq!(items.recv().await.unwrap().descriptions(), ["a", "b", "c"]);
    assert_eq!(items.recv().await, None);

    assert!(matches!(handle.create_item("d"), Err(StoreError::Terminated)));
}

#[tokio::test]
async fn test_on_change_store_does_not_repeat_replayed_state() {
    let config = StoreConfig {
        notify_policy: NotifyPolicy::OnChange,
        ..Default::default()
    };
    let store = TodoStore::with_config(TodoState::from_descriptions(["a"]), config);
    let mut items = store.subscribe_channel().unwrap();

    store.remove_item("zzz").unwrap();
    store.get_state().await.unwrap();

    let mut seen = vec![];
    while let Some(state) = items.try_recv() {
        seen.push(state.descriptions().join(","));
    }
    assert_eq!(seen, ["a"]);
}

#[tokio::test]
async fn test_subscribers_get_copies() {
    let store = TodoStore::new(seed());
    let mut items = store.subscribe_channel().unwrap();

    let mut snapshot = items.recv().await.unwrap();
    snapshot.items.clear();
    snapshot.items.push(Item::new("tampered"));

    assert_eq!(store.get_state().await.unwrap(), seed());
}
