// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

pub const DEFAULT_HISTORY_CAPACITY: usize = 100;

/// When subscribers get called after a fold step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotifyPolicy {
    /// Every fold result is delivered, even if it is equal to the previous one.
    #[default]
    EveryFold,
    /// Skip the delivery when the new state equals the last delivered state.
    OnChange,
}

/// Tunables for a [`Store`](super::Store).
///
/// - `history_capacity`: max number of distinct consecutive states kept in the history.
///   `0` turns history off.
/// - `notify_policy`: see [`NotifyPolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    pub history_capacity: usize,
    pub notify_policy: NotifyPolicy,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            notify_policy: NotifyPolicy::default(),
        }
    }
}
