// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! [RAII] subscription guard. See [`SubscriptionGuard`].
//!
//! [RAII]: https://en.wikipedia.org/wiki/Resource_acquisition_is_initialization

use tokio::sync::mpsc::{UnboundedReceiver, WeakUnboundedSender};

use super::{StoreMessage, SubscriberId};

/// An [RAII] guard that unsubscribes on drop.
///
/// # Drop Behavior
///
/// The unsubscribe request goes through the store's mailbox, so every snapshot produced
/// by actions dispatched before the drop is still delivered, and nothing after it is.
/// Other subscribers are not affected.
///
/// The guard only holds a weak reference to the mailbox. It never keeps the store alive,
/// and dropping it after the store has stopped is a no-op.
///
/// Discarding the guard is flagged, since it would unsubscribe right after the replay:
///
/// ```compile_fail
/// #![deny(unused_must_use)]
/// use r3bl_todo_redux::{SubscriberFn, TodoState, TodoStore};
///
/// fn subscribe_and_forget(store: &TodoStore) {
///     store.subscribe(SubscriberFn(|_: TodoState| {})).unwrap();
/// }
/// ```
///
/// [RAII]: https://en.wikipedia.org/wiki/Resource_acquisition_is_initialization
#[allow(missing_debug_implementations)]
#[must_use = "dropping the guard unsubscribes right away"]
pub struct SubscriptionGuard<S, A> {
    pub id: SubscriberId,
    pub(crate) mailbox: WeakUnboundedSender<StoreMessage<S, A>>,
}

impl<S, A> SubscriptionGuard<S, A> {
    /// Same as dropping the guard, but reads better at the call site.
    pub fn unsubscribe(self) { drop(self); }
}

impl<S, A> Drop for SubscriptionGuard<S, A> {
    fn drop(&mut self) {
        if let Some(mailbox) = self.mailbox.upgrade() {
            // Ignore errors - the store may have already stopped.
            drop(mailbox.send(StoreMessage::Unsubscribe(self.id)));
        }
    }
}

/// A subscription that delivers snapshots into a channel, for callers that would rather
/// `.await` the next state than implement [`AsyncSubscriber`](crate::AsyncSubscriber).
#[allow(missing_debug_implementations)]
pub struct SnapshotReceiver<S, A> {
    pub guard: SubscriptionGuard<S, A>,
    pub receiver: UnboundedReceiver<S>,
}

impl<S, A> SnapshotReceiver<S, A> {
    /// The next snapshot. The first one is the replay of the state at subscription time.
    /// Returns [`None`] once the store has stopped and every buffered snapshot was read.
    pub async fn recv(&mut self) -> Option<S> { self.receiver.recv().await }

    /// The next snapshot if one is already buffered.
    pub fn try_recv(&mut self) -> Option<S> { self.receiver.try_recv().ok() }
}
