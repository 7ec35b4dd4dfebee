// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Merging independent action producers into the store's single mailbox.
//!
//! A [`StoreHandle`] is already a producer: clone it and hand it out. For producers that
//! are naturally a [`Stream`] (an input device, a channel from another subsystem, a test
//! fixture) use [`StoreHandle::attach_source()`]. Each attached stream gets a forwarding
//! task that pushes its items into the mailbox in order. The mailbox interleaves all
//! producers by arrival and never reorders, drops or coalesces anything.

use std::fmt::Debug;

use futures_util::{Stream, StreamExt};
use tokio::task::JoinHandle;

use crate::{StoreHandle, StoreMessage};

impl<S, A> StoreHandle<S, A>
where
    S: Clone + Send + Sync + 'static,
    A: Send + Sync + 'static,
{
    /// Forward every `Ok` action from `source` into the store.
    ///
    /// The first `Err` is fatal to the whole store: it is forwarded as a terminal failure
    /// (tagged with `label`) and the forwarding task ends. A source that simply runs dry
    /// has no effect on the store. The forwarding task also ends when the store stops.
    ///
    /// The returned handle resolves once the forwarding task is done, which is useful to
    /// know that everything the source produced is in the mailbox.
    pub fn attach_source<St, E>(
        &self,
        label: impl Into<String>,
        source: St,
    ) -> JoinHandle<()>
    where
        St: Stream<Item = Result<A, E>> + Send + 'static,
        E: std::error::Error + Send + Sync + 'static,
        A: Debug,
    {
        let label = label.into();
        let handle = self.clone();

        tokio::spawn(async move {
            let mut source = Box::pin(source);
            tracing::debug!(message = "action source attached", label = %label);

            while let Some(item) = source.next().await {
                let message = match item {
                    Ok(action) => StoreMessage::Dispatch(action),
                    Err(error) => {
                        drop(handle.send(StoreMessage::SourceFailed {
                            label,
                            error: Box::new(error),
                        }));
                        return;
                    }
                };
                if handle.send(message).is_err() {
                    return;
                }
            }

            tracing::debug!(message = "action source completed", label = %label);
        })
    }
}

#[cfg(test)]
mod tests {
    use futures_util::stream;
    use pretty_assertions::assert_eq;

    use crate::{StoreBuilder, StoreError};

    #[derive(Debug, thiserror::Error)]
    #[error("producer went away")]
    struct ProducerGone;

    fn push(state: &Vec<i32>, action: &i32) -> Vec<i32> {
        let mut it = state.clone();
        it.push(*action);
        it
    }

    #[tokio::test]
    async fn test_source_items_are_folded_in_order() {
        let store = StoreBuilder::<Vec<i32>, i32>::new(vec![]).with_reducer(push).spawn();

        let source = stream::iter([1, 2, 3].map(Ok::<_, ProducerGone>));
        store.handle().attach_source("numbers", source).await.unwrap();

        assert_eq!(store.shutdown().await.unwrap(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_source_error_is_terminal() {
        let store = StoreBuilder::<Vec<i32>, i32>::new(vec![]).with_reducer(push).spawn();
        let handle = store.handle().clone();

        let source = stream::iter(vec![Ok(1), Err(ProducerGone), Ok(2)]);
        handle.attach_source("flaky", source).await.unwrap();

        match store.shutdown().await {
            Err(StoreError::SourceFailed { label, source }) => {
                assert_eq!(label, "flaky");
                assert_eq!(source.to_string(), "producer went away");
            }
            other => panic!("expected SourceFailed, got {other:?}"),
        }

        assert!(matches!(handle.dispatch(3), Err(StoreError::Terminated)));
        assert!(handle.is_terminated());
    }
}
