// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod action_stream;
pub mod async_effect;
pub mod async_subscriber;
pub mod reducer;
pub mod store;

// Re-export.
pub use action_stream::*;
pub use async_effect::*;
pub use async_subscriber::*;
pub use reducer::*;
pub use store::*;
