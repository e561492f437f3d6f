//! Todo List View Component
//!
//! Renders one row per record in collection order.

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::store::use_todo_store;

/// Todo list component
#[component]
pub fn TodoListView() -> impl IntoView {
    let store = use_todo_store();

    let rows = move || store.with(|state| state.keyed_rows());

    view! {
        <ul class="todo-list">
            <For
                each=rows
                key=|(row_key, todo)| {
                    // edit_text is left out so typing does not rebuild the editor
                    (*row_key, todo.text.clone(), todo.completed, todo.is_editing)
                }
                children=move |(_, todo)| view! { <TodoRow todo=todo /> }
            />
        </ul>
    }
}
