// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use async_trait::async_trait;
use tokio::sync::mpsc::UnboundedSender;

/// Receives state snapshots from the store. The first call is the replay of the state at
/// the moment of subscription, every call after that is one fold result.
///
/// The snapshot is an owned clone; mutating it has no effect on the store.
///
/// Your subscriber runs on the store's actor task. Do not await anything that waits on
/// the store itself (like [`StoreHandle::get_state()`]) from inside [`run()`], that would
/// deadlock the actor. Spawn a task instead.
///
/// [`StoreHandle::get_state()`]: super::StoreHandle::get_state
/// [`run()`]: Self::run
#[async_trait]
pub trait AsyncSubscriber<S>: Send + Sync
where
    S: Send + Sync,
{
    async fn run(&self, state: S);

    /// https://doc.rust-lang.org/book/ch10-02-traits.html
    #[allow(clippy::new_ret_no_self)]
    fn new() -> AsyncSubscriberItem<S>
    where
        Self: Default + Sized + 'static,
    {
        Box::new(Self::default())
    }
}

pub type AsyncSubscriberItem<S> = Box<dyn AsyncSubscriber<S>>;

/// Adapts a plain closure into an [`AsyncSubscriber`].
#[derive(Debug, Clone)]
pub struct SubscriberFn<F>(pub F);

#[async_trait]
impl<S, F> AsyncSubscriber<S> for SubscriberFn<F>
where
    S: Send + Sync + 'static,
    F: Fn(S) + Send + Sync,
{
    async fn run(&self, state: S) { (self.0)(state) }
}

/// Forwards every snapshot into an unbounded channel. Used by
/// [`StoreHandle::subscribe_channel()`](super::StoreHandle::subscribe_channel).
#[derive(Debug)]
pub struct ChannelSubscriber<S> {
    pub sender: UnboundedSender<S>,
}

#[async_trait]
impl<S> AsyncSubscriber<S> for ChannelSubscriber<S>
where
    S: Send + Sync + 'static,
{
    async fn run(&self, state: S) {
        // The receiving side may already be gone, which is fine.
        drop(self.sender.send(state));
    }
}
