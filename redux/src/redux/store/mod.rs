// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod async_store;
pub mod async_store_state_machine;
pub mod store_config;
pub mod store_error;
pub mod store_message;
pub mod subscription_guard;

// Re-export.
pub use async_store::*;
pub use async_store_state_machine::*;
pub use store_config::*;
pub use store_error::*;
pub use store_message::*;
pub use subscription_guard::*;
