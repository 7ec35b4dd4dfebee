// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use async_trait::async_trait;

use super::{TodoAction, TodoState};
use crate::AsyncEffect;

/// Logs every created item. Never produces a follow-up action.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogCreateItemEffect;

#[async_trait]
impl AsyncEffect<TodoState, TodoAction> for LogCreateItemEffect {
    async fn run(&self, action: &TodoAction, state: &TodoState) -> Option<TodoAction> {
        if let TodoAction::Create(item) = action {
            tracing::info!(
                message = "item created",
                description = %item.description,
                item_count = state.len(),
            );
        }
        None
    }
}
