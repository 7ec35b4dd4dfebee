// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::Deref;

use super::{Item, LogCreateItemEffect, RawAction, TodoAction, TodoState, reduce};
use crate::{Store, StoreBuilder, StoreConfig, StoreError, StoreHandle};

pub type TodoHandle = StoreHandle<TodoState, TodoAction>;

/// Dispatch facade for the to-do pipeline. These are the entry points for whatever
/// drives the list (a UI, a test, another service). They push one action each and return
/// right away, without waiting for the fold.
impl TodoHandle {
    /// # Errors
    ///
    /// [`StoreError::Terminated`] if the store has stopped.
    pub fn create_item(&self, description: impl Into<String>) -> Result<(), StoreError> {
        self.dispatch(TodoAction::Create(Item::new(description)))
    }

    /// Removes every item with exactly this description.
    ///
    /// # Errors
    ///
    /// [`StoreError::Terminated`] if the store has stopped.
    pub fn remove_item(&self, description: impl Into<String>) -> Result<(), StoreError> {
        self.dispatch(TodoAction::Remove(description.into()))
    }

    /// # Errors
    ///
    /// [`StoreError::Terminated`] if the store has stopped.
    pub fn dispatch_raw(&self, raw: RawAction) -> Result<(), StoreError> {
        self.dispatch(raw.into())
    }

    /// # Errors
    ///
    /// [`StoreError::MalformedAction`] if the JSON doesn't parse, nothing is dispatched in
    /// that case. [`StoreError::Terminated`] if the store has stopped.
    pub fn dispatch_json(&self, json: &str) -> Result<(), StoreError> {
        self.dispatch_raw(RawAction::from_json(json)?)
    }
}

/// The to-do list store: [`reduce`] as its only reducer, and [`LogCreateItemEffect`].
///
/// Derefs to [`TodoHandle`], so `create_item()`, `remove_item()`, `subscribe()`,
/// `get_state()` and friends can be called on it directly. Clone the handle via
/// [`handle()`](Self::handle) to share it with other tasks.
#[allow(missing_debug_implementations)]
pub struct TodoStore {
    store: Store<TodoState, TodoAction>,
}

impl TodoStore {
    /// Spawns the store on the current Tokio runtime.
    ///
    /// # Panics
    ///
    /// If called outside of a Tokio runtime.
    #[must_use]
    pub fn new(seed: TodoState) -> Self { Self::with_config(seed, StoreConfig::default()) }

    /// # Panics
    ///
    /// If called outside of a Tokio runtime.
    #[must_use]
    pub fn with_config(seed: TodoState, config: StoreConfig) -> Self {
        let store = StoreBuilder::<TodoState, TodoAction>::new(seed)
            .with_config(config)
            .with_reducer(reduce)
            .with_effect(LogCreateItemEffect)
            .spawn();
        Self { store }
    }

    #[must_use]
    pub fn handle(&self) -> TodoHandle { self.store.handle().clone() }

    /// # Errors
    ///
    /// See [`Store::shutdown()`].
    pub async fn shutdown(self) -> Result<TodoState, StoreError> { self.store.shutdown().await }

    /// # Errors
    ///
    /// See [`Store::join()`].
    pub async fn join(self) -> Result<TodoState, StoreError> { self.store.join().await }
}

impl Deref for TodoStore {
    type Target = TodoHandle;

    fn deref(&self) -> &Self::Target { self.store.handle() }
}
