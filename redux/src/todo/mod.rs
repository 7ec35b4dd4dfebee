// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod todo_action;
pub mod todo_effects;
pub mod todo_reducer;
pub mod todo_state;
pub mod todo_store;

// Re-export.
pub use todo_action::*;
pub use todo_effects::*;
pub use todo_reducer::*;
pub use todo_state::*;
pub use todo_store::*;
