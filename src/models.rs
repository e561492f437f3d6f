//! Frontend Models
//!
//! Data structures held in the todo store.

use serde::{Deserialize, Serialize};

/// A single todo record with its display and edit-mode state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u32,
    /// Committed display text
    pub text: String,
    pub completed: bool,
    /// Whether the row renders as an inline editor
    pub is_editing: bool,
    /// Scratch buffer, only meaningful while `is_editing`
    pub edit_text: String,
}

impl Todo {
    pub fn new(id: u32, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
            is_editing: false,
            edit_text: String::new(),
        }
    }
}
