//! Todo Store
//!
//! Every mutation is a pure function from the current snapshot to a new
//! one. The reactive `Store` owned by the root view only ever receives whole
//! snapshots through the `store_*` helpers below.

use leptos::prelude::*;
use reactive_stores::Store;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::config::IdPolicy;
use crate::models::Todo;

/// Snapshot of the widget state
#[derive(Clone, Debug, Default, PartialEq, Eq, Store, Serialize, Deserialize)]
pub struct TodoState {
    /// Records in display order
    pub todos: Vec<Todo>,
    /// Pending text for the next record
    pub entry: String,
    pub id_policy: IdPolicy,
    /// Highest id handed out so far (Monotonic policy)
    pub last_id: u32,
}

impl TodoState {
    pub fn with_policy(id_policy: IdPolicy) -> Self {
        Self {
            id_policy,
            ..Default::default()
        }
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|todo| todo.completed).count()
    }

    pub fn remaining_count(&self) -> usize {
        self.len() - self.completed_count()
    }

    /// The record appended between `before` and this snapshot, if any
    pub fn added_since(&self, before: &Self) -> Option<&Todo> {
        if self.todos.len() > before.todos.len() {
            self.todos.last()
        } else {
            None
        }
    }

    /// Records paired with a stable row key: the id plus how many earlier
    /// records share that id, so duplicates stay distinct while removing a
    /// row leaves the keys of later rows untouched.
    pub fn keyed_rows(&self) -> Vec<((u32, usize), Todo)> {
        let mut seen: HashMap<u32, usize> = HashMap::new();
        self.todos
            .iter()
            .map(|todo| {
                let occurrence = seen.entry(todo.id).or_default();
                let key = (todo.id, *occurrence);
                *occurrence += 1;
                (key, todo.clone())
            })
            .collect()
    }

    /// Serialize the snapshot for debug output
    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string(self).map_err(|e| e.to_string())
    }

    // ========================
    // Mutations
    // ========================

    pub fn set_entry_text(&self, text: impl Into<String>) -> Self {
        Self {
            entry: text.into(),
            ..self.clone()
        }
    }

    /// Append the entry buffer as a new record and clear it.
    /// Blank (whitespace-only) entries leave the snapshot unchanged.
    pub fn add_todo(&self) -> Self {
        if self.entry.trim().is_empty() {
            return self.clone();
        }

        let id = self.next_id();
        let mut todos = self.todos.clone();
        todos.push(Todo::new(id, self.entry.clone()));

        Self {
            todos,
            entry: String::new(),
            id_policy: self.id_policy,
            last_id: self.last_id.max(id),
        }
    }

    pub fn toggle_complete(&self, id: u32) -> Self {
        self.map_todo(id, |todo| Todo {
            completed: !todo.completed,
            ..todo.clone()
        })
    }

    pub fn delete_todo(&self, id: u32) -> Self {
        Self {
            todos: self.todos.iter().filter(|todo| todo.id != id).cloned().collect(),
            ..self.clone()
        }
    }

    /// Enter edit mode, seeding the scratch buffer with the current text
    pub fn begin_edit(&self, id: u32) -> Self {
        self.map_todo(id, |todo| Todo {
            is_editing: true,
            edit_text: todo.text.clone(),
            ..todo.clone()
        })
    }

    /// Leave edit mode; the scratch buffer is left as is
    pub fn cancel_edit(&self, id: u32) -> Self {
        self.map_todo(id, |todo| Todo {
            is_editing: false,
            ..todo.clone()
        })
    }

    /// Commit the scratch buffer. Unlike `add_todo`, empty text is accepted.
    pub fn save_edit(&self, id: u32) -> Self {
        self.map_todo(id, |todo| Todo {
            text: todo.edit_text.clone(),
            is_editing: false,
            ..todo.clone()
        })
    }

    pub fn set_edit_text(&self, id: u32, text: impl Into<String>) -> Self {
        let text = text.into();
        self.map_todo(id, |todo| Todo {
            edit_text: text.clone(),
            ..todo.clone()
        })
    }

    fn next_id(&self) -> u32 {
        match self.id_policy {
            IdPolicy::Monotonic => self.last_id + 1,
            IdPolicy::LengthPlusOne => self.todos.len() as u32 + 1,
        }
    }

    /// Rebuild the collection, replacing every record whose id matches
    fn map_todo(&self, id: u32, f: impl Fn(&Todo) -> Todo) -> Self {
        Self {
            todos: self
                .todos
                .iter()
                .map(|todo| if todo.id == id { f(todo) } else { todo.clone() })
                .collect(),
            ..self.clone()
        }
    }
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

/// Get the todo store from context
pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the store's value with the snapshot produced by `f`
fn store_apply(store: &TodoStore, f: impl FnOnce(&TodoState) -> TodoState) {
    let next = store.with_untracked(f);
    store.set(next);
}

pub fn store_set_entry_text(store: &TodoStore, text: String) {
    store_apply(store, |state| state.set_entry_text(text));
}

pub fn store_add_todo(store: &TodoStore) {
    store_apply(store, TodoState::add_todo);
}

pub fn store_toggle_complete(store: &TodoStore, id: u32) {
    store_apply(store, |state| state.toggle_complete(id));
}

pub fn store_delete_todo(store: &TodoStore, id: u32) {
    store_apply(store, |state| state.delete_todo(id));
}

pub fn store_begin_edit(store: &TodoStore, id: u32) {
    store_apply(store, |state| state.begin_edit(id));
}

pub fn store_cancel_edit(store: &TodoStore, id: u32) {
    store_apply(store, |state| state.cancel_edit(id));
}

pub fn store_save_edit(store: &TodoStore, id: u32) {
    store_apply(store, |state| state.save_edit(id));
}

pub fn store_set_edit_text(store: &TodoStore, id: u32, text: String) {
    store_apply(store, |state| state.set_edit_text(id, text));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_todo(id: u32, text: &str) -> Todo {
        Todo::new(id, text)
    }

    fn add(state: &TodoState, text: &str) -> TodoState {
        state.set_entry_text(text).add_todo()
    }

    fn texts(state: &TodoState) -> Vec<&str> {
        state.todos.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_add_in_order() {
        let state = add(&add(&TodoState::default(), "a"), "b");

        assert_eq!(texts(&state), vec!["a", "b"]);
        assert!(state.todos.iter().all(|t| !t.completed && !t.is_editing));
        assert_eq!(state.todos[0].id, 1);
        assert_eq!(state.todos[1].id, 2);
        assert_eq!(state.entry, "");
    }

    #[test]
    fn test_add_keeps_untrimmed_text() {
        let state = add(&TodoState::default(), "  padded ");
        assert_eq!(state.todos[0].text, "  padded ");
    }

    #[test]
    fn test_add_blank_is_noop() {
        let base = add(&TodoState::default(), "a");

        for blank in ["", "   ", "\t\n"] {
            let with_entry = base.set_entry_text(blank);
            let after = with_entry.add_todo();
            assert_eq!(after, with_entry);
            assert_eq!(after.len(), 1);
        }
    }

    #[test]
    fn test_toggle_twice_restores() {
        let state = add(&TodoState::default(), "a");
        let once = state.toggle_complete(1);
        assert!(once.todos[0].completed);
        let twice = once.toggle_complete(1);
        assert_eq!(twice, state);
    }

    #[test]
    fn test_toggle_missing_is_noop() {
        let state = add(&TodoState::default(), "a");
        assert_eq!(state.toggle_complete(42), state);
    }

    #[test]
    fn test_edit_ops_missing_is_noop() {
        let state = add(&add(&TodoState::default(), "a"), "b").begin_edit(2);

        assert_eq!(state.begin_edit(9), state);
        assert_eq!(state.cancel_edit(9), state);
        assert_eq!(state.save_edit(9), state);
        assert_eq!(state.set_edit_text(9, "z"), state);
    }

    #[test]
    fn test_added_since() {
        let before = TodoState::default().set_entry_text("   ");
        assert_eq!(before.add_todo().added_since(&before), None);

        let before = before.set_entry_text("a");
        let after = before.add_todo();
        assert_eq!(after.added_since(&before), Some(&make_todo(1, "a")));

        // edits and deletes never report an addition
        assert_eq!(after.toggle_complete(1).added_since(&after), None);
        assert_eq!(after.delete_todo(1).added_since(&after), None);
    }

    #[test]
    fn test_row_keys_survive_delete() {
        let state = add(&add(&add(&TodoState::default(), "a"), "b"), "c").begin_edit(3);
        let keys: Vec<_> = state.keyed_rows().into_iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec![(1, 0), (2, 0), (3, 0)]);

        let after = state.delete_todo(1);
        let keys: Vec<_> = after.keyed_rows().into_iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec![(2, 0), (3, 0)]);
    }

    #[test]
    fn test_row_keys_split_duplicate_ids() {
        let state = TodoState::with_policy(IdPolicy::LengthPlusOne);
        let state = add(&add(&state, "a"), "b").delete_todo(1);
        let state = add(&state, "c");

        let rows = state.keyed_rows();
        assert_eq!(rows[0].0, (2, 0));
        assert_eq!(rows[1].0, (2, 1));
        assert_eq!(rows[0].1.text, "b");
        assert_eq!(rows[1].1.text, "c");
    }

    #[test]
    fn test_delete_preserves_order() {
        let state = add(&add(&add(&TodoState::default(), "a"), "b"), "c");
        let after = state.delete_todo(2);

        assert_eq!(texts(&after), vec!["a", "c"]);
        assert_eq!(after.todos[0].id, 1);
        assert_eq!(after.todos[1].id, 3);
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let state = add(&add(&TodoState::default(), "a"), "b");
        assert_eq!(state.delete_todo(99), state);
    }

    #[test]
    fn test_begin_then_cancel_edit() {
        let state = add(&TodoState::default(), "a");
        let editing = state.begin_edit(1);
        assert!(editing.todos[0].is_editing);
        assert_eq!(editing.todos[0].edit_text, "a");

        let cancelled = editing.set_edit_text(1, "changed").cancel_edit(1);
        assert_eq!(cancelled.todos[0].text, "a");
        assert!(!cancelled.todos[0].is_editing);
        // scratch buffer is left stale
        assert_eq!(cancelled.todos[0].edit_text, "changed");
    }

    #[test]
    fn test_edit_and_save() {
        let state = add(&TodoState::default(), "a")
            .begin_edit(1)
            .set_edit_text(1, "x")
            .save_edit(1);

        assert_eq!(state.todos[0].text, "x");
        assert!(!state.todos[0].is_editing);
    }

    #[test]
    fn test_save_accepts_empty_text() {
        let state = add(&TodoState::default(), "a")
            .begin_edit(1)
            .set_edit_text(1, "")
            .save_edit(1);

        assert_eq!(state.len(), 1);
        assert_eq!(state.todos[0].text, "");
    }

    #[test]
    fn test_multiple_rows_editing() {
        let state = add(&add(&TodoState::default(), "a"), "b").begin_edit(1).begin_edit(2);
        assert!(state.todos.iter().all(|t| t.is_editing));
    }

    #[test]
    fn test_mutations_do_not_touch_previous_snapshot() {
        let before = add(&TodoState::default(), "a");
        let _ = before.toggle_complete(1).delete_todo(1);
        assert_eq!(before.todos, vec![make_todo(1, "a")]);
    }

    #[test]
    fn test_end_to_end_scenario() {
        let state = add(&add(&TodoState::default(), "Buy milk"), "Walk dog");
        let milk = state.todos.iter().find(|t| t.text == "Buy milk").unwrap().id;
        let dog = state.todos.iter().find(|t| t.text == "Walk dog").unwrap().id;

        let state = state.toggle_complete(milk).delete_todo(dog);

        assert_eq!(state.len(), 1);
        assert_eq!(state.todos[0].text, "Buy milk");
        assert!(state.todos[0].completed);
        assert_eq!(state.completed_count(), 1);
        assert_eq!(state.remaining_count(), 0);
    }

    #[test]
    fn test_monotonic_ids_survive_delete() {
        let state = add(&add(&TodoState::default(), "a"), "b").delete_todo(1);
        let state = add(&state, "c");

        let ids: Vec<u32> = state.todos.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_length_plus_one_ids_can_collide() {
        let state = TodoState::with_policy(IdPolicy::LengthPlusOne);
        let state = add(&add(&state, "a"), "b").delete_todo(1);
        let state = add(&state, "c");

        let ids: Vec<u32> = state.todos.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 2]);

        // id-targeted mutations hit every record sharing the id
        let toggled = state.toggle_complete(2);
        assert_eq!(toggled.completed_count(), 2);
    }

    #[test]
    fn test_snapshot_json() {
        let state = add(&TodoState::default(), "a").toggle_complete(1);
        let json = state.to_json().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["todos"][0]["text"], "a");
        assert_eq!(parsed["todos"][0]["completed"], true);
        assert_eq!(parsed["id_policy"], "Monotonic");

        let back: TodoState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
