// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

/// A pure fold step: given the current state and one action, produce the next state.
///
/// Implementations must not have side effects and must not read anything other than their
/// arguments. Put side effects in an [`AsyncEffect`](super::AsyncEffect) instead.
///
/// Any `Fn(&S, &A) -> S` closure or plain function is a reducer, so most of the time you
/// just pass a function to
/// [`StoreBuilder::with_reducer()`](super::StoreBuilder::with_reducer).
pub trait Reducer<S, A>: Send + Sync {
    fn run(&self, action: &A, state: &S) -> S;
}

impl<S, A, F> Reducer<S, A> for F
where
    F: Fn(&S, &A) -> S + Send + Sync,
{
    fn run(&self, action: &A, state: &S) -> S { self(state, action) }
}

pub type ReducerItem<S, A> = Box<dyn Reducer<S, A>>;
pub type ReducerVec<S, A> = Vec<ReducerItem<S, A>>;

/// Run every reducer in sequence, each one seeing the output of the previous one. With no
/// reducers the state is cloned as is.
pub fn run_reducers<S, A>(reducers: &[ReducerItem<S, A>], action: &A, state: &S) -> S
where
    S: Clone,
{
    reducers
        .iter()
        .fold(state.clone(), |acc, reducer| reducer.run(action, &acc))
}
