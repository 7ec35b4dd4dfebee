// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Debug, Formatter};

use tokio::sync::oneshot;

use super::BoxedSourceError;
use crate::AsyncSubscriberItem;

pub type SubscriberId = u64;

/// Everything the actor can be asked to do. Actions and subscription changes share this
/// one mailbox, which is what keeps them ordered with respect to each other.
pub enum StoreMessage<S, A> {
    Dispatch(A),
    Subscribe {
        id: SubscriberId,
        subscriber: AsyncSubscriberItem<S>,
    },
    Unsubscribe(SubscriberId),
    GetState(oneshot::Sender<S>),
    GetHistory(oneshot::Sender<Vec<S>>),
    SourceFailed {
        label: String,
        error: BoxedSourceError,
    },
    Shutdown,
}

impl<S, A: Debug> Debug for StoreMessage<S, A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreMessage::Dispatch(action) => write!(f, "Dispatch({action:?})"),
            StoreMessage::Subscribe { id, .. } => write!(f, "Subscribe({id})"),
            StoreMessage::Unsubscribe(id) => write!(f, "Unsubscribe({id})"),
            StoreMessage::GetState(_) => write!(f, "GetState"),
            StoreMessage::GetHistory(_) => write!(f, "GetHistory"),
            StoreMessage::SourceFailed { label, error } => {
                write!(f, "SourceFailed({label}: {error})")
            }
            StoreMessage::Shutdown => write!(f, "Shutdown"),
        }
    }
}
