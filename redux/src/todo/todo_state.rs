// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// The only domain entity: a line of text. Two items with the same description are equal,
/// there is no other identity.
///
/// Empty descriptions are allowed here; rejecting them is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Item {
    pub description: String,
}

/// Same thing, the tutorial calls it both ways.
pub type Task = Item;

impl Item {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

impl From<&str> for Item {
    fn from(description: &str) -> Self { Self::new(description) }
}

impl From<String> for Item {
    fn from(description: String) -> Self { Self::new(description) }
}

impl Display for Item {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description)
    }
}

/// Ordered list of items. Insertion order is significant.
#[derive(Clone, Default, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct TodoState {
    pub items: Vec<Item>,
}

impl TodoState {
    pub fn from_descriptions<I, T>(descriptions: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            items: descriptions.into_iter().map(Item::new).collect(),
        }
    }

    #[must_use]
    pub fn descriptions(&self) -> Vec<&str> {
        self.items.iter().map(|it| it.description.as_str()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize { self.items.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.items.is_empty() }
}

impl From<Vec<Item>> for TodoState {
    fn from(items: Vec<Item>) -> Self { Self { items } }
}
