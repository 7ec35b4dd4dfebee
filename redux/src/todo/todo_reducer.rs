// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{TodoAction, TodoState};

/// The to-do fold step. Pure: the input state is never touched, a new one is returned.
///
/// - [`TodoAction::Create`] appends, duplicates included.
/// - [`TodoAction::Remove`] drops *every* item whose description matches. No match gives
///   back an equal state.
/// - [`TodoAction::Unrecognized`] gives back an equal state.
pub fn reduce(state: &TodoState, action: &TodoAction) -> TodoState {
    match action {
        TodoAction::Create(item) => {
            let mut items = Vec::with_capacity(state.items.len() + 1);
            items.extend_from_slice(&state.items);
            items.push(item.clone());
            TodoState { items }
        }

        TodoAction::Remove(description) => TodoState {
            items: state
                .items
                .iter()
                .filter(|it| it.description != *description)
                .cloned()
                .collect(),
        },

        TodoAction::Unrecognized { .. } => state.clone(),
    }
}
