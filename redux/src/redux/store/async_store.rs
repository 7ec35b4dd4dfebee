// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::Debug,
          sync::{Arc,
                 atomic::{AtomicU64, Ordering}}};

use tokio::{sync::{mpsc::{self, UnboundedSender},
                   oneshot},
            task::JoinHandle};

use super::{SnapshotReceiver, StoreConfig, StoreError, StoreMessage, StoreStateMachine,
            SubscriptionGuard};
use crate::{AsyncEffect, AsyncEffectVec, AsyncSubscriber, ChannelSubscriber, Reducer,
            ReducerVec};

/// Collects the seed state, reducers, effects and config, then spawns the store's actor
/// task with [`spawn()`](Self::spawn).
#[allow(missing_debug_implementations)]
pub struct StoreBuilder<S, A>
where
    S: Sync + Send + 'static,
    A: Sync + Send + 'static,
{
    initial_state: S,
    config: StoreConfig,
    reducer_vec: ReducerVec<S, A>,
    effect_vec: AsyncEffectVec<S, A>,
}

impl<S, A> StoreBuilder<S, A>
where
    S: Clone + PartialEq + Debug + Sync + Send + 'static,
    A: Clone + Debug + Sync + Send + 'static,
{
    #[must_use]
    pub fn new(initial_state: S) -> Self {
        Self {
            initial_state,
            config: StoreConfig::default(),
            reducer_vec: vec![],
            effect_vec: vec![],
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: StoreConfig) -> Self {
        self.config = config;
        self
    }

    /// Reducers run in the order they are added.
    #[must_use]
    pub fn with_reducer(mut self, reducer: impl Reducer<S, A> + 'static) -> Self {
        self.reducer_vec.push(Box::new(reducer));
        self
    }

    #[must_use]
    pub fn with_effect(mut self, effect: impl AsyncEffect<S, A> + 'static) -> Self {
        self.effect_vec.push(Box::new(effect));
        self
    }

    /// Spawn the actor task on the current Tokio runtime.
    ///
    /// # Panics
    ///
    /// If called outside of a Tokio runtime.
    #[must_use]
    pub fn spawn(self) -> Store<S, A> {
        let (sender, mailbox) = mpsc::unbounded_channel();

        let state_machine = StoreStateMachine::new(
            self.initial_state,
            self.config,
            self.reducer_vec,
            self.effect_vec,
        );
        let actor = tokio::spawn(state_machine.run_event_loop(mailbox));

        Store {
            handle: StoreHandle {
                mailbox: sender,
                next_subscriber_id: Arc::new(AtomicU64::new(0)),
            },
            actor,
        }
    }
}

/// Thread safe and async Redux store (using [`tokio`]).
///
/// The store owns its actor task. Hand out [`StoreHandle`]s (cheap to clone) to whoever
/// needs to dispatch or subscribe, and keep the [`Store`] itself to [`shutdown()`] or
/// [`join()`] it.
///
/// [`join()`]: Self::join
/// [`shutdown()`]: Self::shutdown
#[allow(missing_debug_implementations)]
pub struct Store<S, A> {
    handle: StoreHandle<S, A>,
    actor: JoinHandle<Result<S, StoreError>>,
}

impl<S, A> Store<S, A>
where
    S: Clone + Send + Sync + 'static,
    A: Send + Sync + 'static,
{
    pub fn handle(&self) -> &StoreHandle<S, A> { &self.handle }

    /// Stop the actor once it has processed every message queued before this call.
    ///
    /// # Errors
    ///
    /// The terminal [`StoreError::SourceFailed`] if an action source failed earlier, or
    /// [`StoreError::ActorPanicked`] if the actor task panicked.
    pub async fn shutdown(self) -> Result<S, StoreError> {
        // If the actor already stopped, the send fails and the join below reports why.
        drop(self.handle.mailbox.send(StoreMessage::Shutdown));
        self.join().await
    }

    /// Wait for the actor to stop by itself: when the last [`StoreHandle`] is dropped, or
    /// when an action source fails. Handles cloned from this store keep it running.
    ///
    /// # Errors
    ///
    /// Same as [`shutdown()`](Self::shutdown).
    pub async fn join(self) -> Result<S, StoreError> {
        let Self { handle, actor } = self;
        drop(handle);
        actor.await.map_err(StoreError::ActorPanicked)?
    }
}

/// Cloneable entry point into a running [`Store`]. Every method pushes a message into
/// the store's mailbox, so everything sent from one handle is processed in order, and
/// messages from different handles are processed in the order they were sent.
#[allow(missing_debug_implementations)]
pub struct StoreHandle<S, A> {
    mailbox: UnboundedSender<StoreMessage<S, A>>,
    next_subscriber_id: Arc<AtomicU64>,
}

impl<S, A> Clone for StoreHandle<S, A> {
    fn clone(&self) -> Self {
        Self {
            mailbox: self.mailbox.clone(),
            next_subscriber_id: self.next_subscriber_id.clone(),
        }
    }
}

impl<S, A> StoreHandle<S, A>
where
    S: Clone + Send + Sync + 'static,
    A: Send + Sync + 'static,
{
    /// Fire and forget. Returns as soon as the action is in the mailbox.
    ///
    /// # Errors
    ///
    /// [`StoreError::Terminated`] if the store has stopped.
    pub fn dispatch(&self, action: A) -> Result<(), StoreError> {
        self.send(StoreMessage::Dispatch(action))
    }

    /// The subscriber is immediately called with the current state, then with every
    /// later fold result, until the returned guard is dropped.
    ///
    /// # Errors
    ///
    /// [`StoreError::Terminated`] if the store has stopped.
    pub fn subscribe(
        &self,
        subscriber: impl AsyncSubscriber<S> + 'static,
    ) -> Result<SubscriptionGuard<S, A>, StoreError> {
        let id = self.next_subscriber_id.fetch_add(1, Ordering::Relaxed);
        self.send(StoreMessage::Subscribe {
            id,
            subscriber: Box::new(subscriber),
        })?;
        Ok(SubscriptionGuard {
            id,
            mailbox: self.mailbox.downgrade(),
        })
    }

    /// Like [`subscribe()`](Self::subscribe), but the snapshots are delivered into a
    /// channel.
    ///
    /// # Errors
    ///
    /// [`StoreError::Terminated`] if the store has stopped.
    pub fn subscribe_channel(&self) -> Result<SnapshotReceiver<S, A>, StoreError> {
        let (sender, receiver) = mpsc::unbounded_channel();
        let guard = self.subscribe(ChannelSubscriber { sender })?;
        Ok(SnapshotReceiver { guard, receiver })
    }

    /// The state after every message sent before this call has been processed.
    ///
    /// # Errors
    ///
    /// [`StoreError::Terminated`] if the store has stopped.
    pub async fn get_state(&self) -> Result<S, StoreError> {
        let (sender, receiver) = oneshot::channel();
        self.send(StoreMessage::GetState(sender))?;
        receiver.await.map_err(|_| StoreError::Terminated)
    }

    /// Distinct consecutive states, oldest first.
    ///
    /// # Errors
    ///
    /// [`StoreError::Terminated`] if the store has stopped.
    pub async fn get_history(&self) -> Result<Vec<S>, StoreError> {
        let (sender, receiver) = oneshot::channel();
        self.send(StoreMessage::GetHistory(sender))?;
        receiver.await.map_err(|_| StoreError::Terminated)
    }

    pub fn is_terminated(&self) -> bool { self.mailbox.is_closed() }

    pub(crate) fn send(&self, message: StoreMessage<S, A>) -> Result<(), StoreError> {
        self.mailbox.send(message).map_err(|_| {
            tracing::warn!(message = "store is no longer running, message dropped");
            StoreError::Terminated
        })
    }
}
