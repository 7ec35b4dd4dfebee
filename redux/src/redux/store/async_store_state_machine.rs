// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{collections::VecDeque, fmt::Debug};

use futures_util::future::join_all;
use tokio::sync::mpsc::UnboundedReceiver;

use super::{NotifyPolicy, StoreConfig, StoreError, StoreMessage, SubscriberId};
use crate::{AsyncEffectVec, AsyncSubscriberItem, ReducerVec, run_reducers};

/// The state owned by the store's actor task. Only the actor touches it, so there are no
/// locks here. Build one via [`StoreBuilder`](super::StoreBuilder).
#[allow(missing_debug_implementations)]
pub struct StoreStateMachine<S, A>
where
    S: Sync + Send + 'static,
    A: Sync + Send + 'static,
{
    pub state: S,
    pub history: VecDeque<S>,
    pub config: StoreConfig,
    pub reducer_vec: ReducerVec<S, A>,
    pub effect_vec: AsyncEffectVec<S, A>,
    pub subscriber_vec: Vec<(SubscriberId, AsyncSubscriberItem<S>)>,
    pub maybe_last_delivered_state: Option<S>,
}

impl<S, A> StoreStateMachine<S, A>
where
    S: Clone + PartialEq + Debug + Sync + Send + 'static,
    A: Clone + Debug + Sync + Send + 'static,
{
    pub fn new(
        initial_state: S,
        config: StoreConfig,
        reducer_vec: ReducerVec<S, A>,
        effect_vec: AsyncEffectVec<S, A>,
    ) -> Self {
        let mut it = Self {
            state: initial_state,
            history: VecDeque::new(),
            config,
            reducer_vec,
            effect_vec,
            subscriber_vec: vec![],
            maybe_last_delivered_state: None,
        };
        let seed = it.state.clone();
        it.update_history(&seed);
        it
    }

    /// The actor's main loop. Returns the final state when the mailbox closes or a
    /// [`StoreMessage::Shutdown`] arrives, and an error when an action source fails.
    pub async fn run_event_loop(
        mut self,
        mut mailbox: UnboundedReceiver<StoreMessage<S, A>>,
    ) -> Result<S, StoreError> {
        tracing::info!(message = "store actor started", state = ?self.state);

        while let Some(message) = mailbox.recv().await {
            match message {
                StoreMessage::Dispatch(action) => self.dispatch_action(action).await,
                StoreMessage::Subscribe { id, subscriber } => {
                    tracing::debug!(message = "subscribe", id);
                    // Replay the current state before any later fold result.
                    subscriber.run(self.state.clone()).await;
                    if self.config.notify_policy == NotifyPolicy::OnChange {
                        self.maybe_last_delivered_state = Some(self.state.clone());
                    }
                    self.subscriber_vec.push((id, subscriber));
                }
                StoreMessage::Unsubscribe(id) => {
                    tracing::debug!(message = "unsubscribe", id);
                    self.subscriber_vec.retain(|(it, _)| *it != id);
                }
                StoreMessage::GetState(sender) => drop(sender.send(self.state.clone())),
                StoreMessage::GetHistory(sender) => {
                    drop(sender.send(self.history.iter().cloned().collect()));
                }
                StoreMessage::SourceFailed { label, error } => {
                    // % is Display, ? is Debug.
                    tracing::error!(
                        message = "action source failed, stopping store",
                        label = %label,
                        error = %error,
                    );
                    return Err(StoreError::SourceFailed {
                        label,
                        source: error,
                    });
                }
                StoreMessage::Shutdown => break,
            }
        }

        tracing::info!(message = "store actor stopped", state = ?self.state);
        Ok(self.state)
    }

    /// Fold the action, notify subscribers, then run effects. Follow-up actions returned
    /// by effects are folded right away, before the next mailbox message.
    pub async fn dispatch_action(&mut self, action: A) {
        let mut pending_actions = VecDeque::from([action]);

        while let Some(action) = pending_actions.pop_front() {
            tracing::debug!(message = "dispatch", action = ?action);

            self.run_reducers(&action);
            self.run_subscribers().await;

            let follow_ups = self.run_effects(&action).await;
            pending_actions.extend(follow_ups);
        }
    }

    fn run_reducers(&mut self, action: &A) {
        let new_state = run_reducers(&self.reducer_vec, action, &self.state);
        self.update_history(&new_state);
        self.state = new_state;
    }

    fn has_state_changed(&self) -> bool {
        match &self.maybe_last_delivered_state {
            Some(previous_state) => *previous_state != self.state,
            None => true,
        }
    }

    /// Run these concurrently (cooperatively on the actor task).
    async fn run_subscribers(&mut self) {
        if self.config.notify_policy == NotifyPolicy::OnChange {
            // Early return if state hasn't changed.
            if !self.has_state_changed() {
                return;
            }
            self.maybe_last_delivered_state = Some(self.state.clone());
        }

        let state = &self.state;
        let vec_fut = self
            .subscriber_vec
            .iter()
            .map(|(_, subscriber)| subscriber.run(state.clone()));
        join_all(vec_fut).await;
    }

    /// Run concurrently, collect the follow-up actions in effect order.
    async fn run_effects(&self, action: &A) -> Vec<A> {
        let vec_fut = self
            .effect_vec
            .iter()
            .map(|effect| effect.run(action, &self.state));
        join_all(vec_fut).await.into_iter().flatten().collect()
    }

    /// Consecutive duplicates are not recorded. Oldest entries are evicted first.
    fn update_history(&mut self, new_state: &S) {
        let capacity = self.config.history_capacity;
        if capacity == 0 {
            return;
        }

        if self.history.back() == Some(new_state) {
            return;
        }

        while self.history.len() >= capacity {
            self.history.pop_front();
        }
        self.history.push_back(new_state.clone());
    }
}
