// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Item;
use crate::StoreError;

/// What the reducer understands.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TodoAction {
    /// Append this item.
    Create(Item),
    /// Remove every item with this description.
    Remove(String),
    /// Came in from outside with a type tag nobody knows. Folds to a no-op.
    Unrecognized { action_type: String },
}

impl TodoAction {
    pub fn create(description: impl Into<String>) -> Self {
        Self::Create(Item::new(description))
    }

    pub fn remove(description: impl Into<String>) -> Self { Self::Remove(description.into()) }
}

/// The type tags accepted on [`RawAction::action_type`]. Both the plain names and the
/// `ADD_TASK` / `REMOVE_TASK` constants are recognized, matched exactly.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::EnumString, strum_macros::Display,
)]
pub enum TodoActionType {
    #[strum(to_string = "create", serialize = "ADD_TASK")]
    Create,
    #[strum(to_string = "remove", serialize = "REMOVE_TASK")]
    Remove,
}

/// Payload of a [`RawAction`]: either a bare description or a whole item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawPayload {
    Description(String),
    Item(Item),
}

impl RawPayload {
    fn into_description(self) -> String {
        match self {
            RawPayload::Description(it) => it,
            RawPayload::Item(it) => it.description,
        }
    }
}

/// An action as it arrives from outside the type system, eg:
/// `{"actionType": "create", "payload": "milk"}`. Converting it into a [`TodoAction`]
/// never fails; an unknown `actionType` becomes [`TodoAction::Unrecognized`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAction {
    pub action_type: String,
    pub payload: RawPayload,
}

impl RawAction {
    /// # Errors
    ///
    /// [`StoreError::MalformedAction`] if `json` isn't a raw action object.
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        serde_json::from_str(json).map_err(StoreError::MalformedAction)
    }
}

impl From<RawAction> for TodoAction {
    fn from(raw: RawAction) -> Self {
        match TodoActionType::from_str(&raw.action_type) {
            Ok(TodoActionType::Create) => match raw.payload {
                RawPayload::Description(it) => TodoAction::Create(Item::new(it)),
                RawPayload::Item(it) => TodoAction::Create(it),
            },
            Ok(TodoActionType::Remove) => TodoAction::Remove(raw.payload.into_description()),
            Err(_) => TodoAction::Unrecognized {
                action_type: raw.action_type,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case(r#"{"actionType": "create", "payload": "milk"}"#, TodoAction::create("milk"); "create with description")]
    #[test_case(r#"{"actionType": "ADD_TASK", "payload": "milk"}"#, TodoAction::create("milk"); "add task constant")]
    #[test_case(r#"{"actionType": "create", "payload": {"description": "eggs"}}"#, TodoAction::create("eggs"); "create with item")]
    #[test_case(r#"{"actionType": "remove", "payload": "milk"}"#, TodoAction::remove("milk"); "remove with description")]
    #[test_case(r#"{"actionType": "REMOVE_TASK", "payload": {"description": "milk"}}"#, TodoAction::remove("milk"); "remove task constant with item")]
    #[test_case(r#"{"actionType": "TOGGLE_TASK", "payload": "milk"}"#, TodoAction::Unrecognized { action_type: "TOGGLE_TASK".into() }; "unknown type")]
    #[test_case(r#"{"actionType": "Create", "payload": "milk"}"#, TodoAction::Unrecognized { action_type: "Create".into() }; "type tags are case sensitive")]
    fn test_raw_action_into_todo_action(json: &str, expected: TodoAction) {
        let raw = RawAction::from_json(json).unwrap();
        assert_eq!(TodoAction::from(raw), expected);
    }

    #[test]
    fn test_malformed_json() {
        let result = RawAction::from_json(r#"{"payload": "milk"}"#);
        assert!(matches!(result, Err(StoreError::MalformedAction(_))));
    }

    #[test]
    fn test_action_type_display() {
        assert_eq!(TodoActionType::Create.to_string(), "create");
        assert_eq!(TodoActionType::Remove.to_string(), "remove");
    }
}
