// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use async_trait::async_trait;

/// Side effects that run after an action has been folded into the state and the
/// subscribers have seen the result.
///
/// Return `Some(action)` to have the store fold a follow-up action. Follow-ups are folded
/// before the next message in the mailbox is picked up, in the order the effects return
/// them.
///
/// Your effect runs on the store's actor task. Do not await anything that waits on the
/// store itself (like [`StoreHandle::get_state()`]) from inside [`run()`], that would
/// deadlock the actor. Spawn a task instead, or return the follow-up action.
///
/// [`StoreHandle::get_state()`]: super::StoreHandle::get_state
/// [`run()`]: Self::run
#[async_trait]
pub trait AsyncEffect<S, A>: Send + Sync
where
    S: Sync + Send,
    A: Sync + Send,
{
    async fn run(&self, action: &A, state: &S) -> Option<A>;

    /// https://doc.rust-lang.org/book/ch10-02-traits.html
    #[allow(clippy::new_ret_no_self)]
    fn new() -> AsyncEffectItem<S, A>
    where
        Self: Default + Sized + 'static,
    {
        Box::new(Self::default())
    }
}

pub type AsyncEffectItem<S, A> = Box<dyn AsyncEffect<S, A>>;
pub type AsyncEffectVec<S, A> = Vec<AsyncEffectItem<S, A>>;
