// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_todo_redux
//!
//! A small, fully async Redux store built on [`tokio`], and the to-do list pipeline that
//! runs on top of it.
//!
//! The store is an actor: one Tokio task owns the state, the reducers, the effects and
//! the subscribers. Everything else talks to it through a single mailbox, so:
//!  1. Actions from any number of producers are folded in the exact order they arrive.
//!  2. Reducers are pure `(state, action) -> state` functions. Nobody ever gets a mutable
//!     reference to the running state, subscribers receive owned snapshots.
//!  3. A new subscriber is immediately replayed the current state, then receives every
//!     later fold result.
//!  4. If an attached action source fails, the whole pipeline stops (fail fast).
//!
//! The [`todo`] module wires this up for a list of [`Item`]s with a dispatch facade,
//! [`TodoStore`]:
//!
//! ```no_run
//! use r3bl_todo_redux::{Item, TodoState, TodoStore};
//!
//! # async fn example() -> Result<(), r3bl_todo_redux::StoreError> {
//! let store = TodoStore::new(TodoState::from_descriptions(["a", "b"]));
//! store.create_item("c")?;
//! store.remove_item("b")?;
//!
//! let mut items = store.subscribe_channel()?;
//! assert_eq!(
//!     items.recv().await.map(|it| it.items),
//!     Some(vec![Item::new("a"), Item::new("c")])
//! );
//! # Ok(())
//! # }
//! ```
//!
//! Logging goes through [`tracing`]. Call [`init_tracing`] with a [`TracingConfig`] to
//! see what the store is doing.

// Enforce strict error handling in production code. Test code (cfg(test)) is still
// allowed to use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod log;
pub mod redux;
pub mod todo;

// Re-export.
pub use log::*;
pub use redux::*;
pub use todo::*;
