//! Todo List App
//!
//! Root component: owns the store and provides it to the children.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{NewTodoForm, TodoListView};
use crate::config::TodoConfig;
use crate::store::{TodoState, TodoStateStoreFields, TodoStore};

#[component]
pub fn App(#[prop(optional)] config: Option<TodoConfig>) -> impl IntoView {
    let config = config.unwrap_or_default();
    let store: TodoStore = Store::new(TodoState::with_policy(config.id_policy));
    let title = config.title.clone();

    // Provide context to all children
    provide_context(store);
    provide_context(config);

    // Dump each new snapshot in debug builds
    Effect::new(move |_| {
        let len = store.todos().with(|todos| todos.len());
        if cfg!(debug_assertions) {
            match store.with_untracked(|state| state.to_json()) {
                Ok(json) => web_sys::console::log_1(&format!("[APP] {} todos: {}", len, json).into()),
                Err(e) => web_sys::console::log_1(&format!("[APP] Snapshot failed: {}", e).into()),
            }
        }
    });

    view! {
        <section class="container">
            <h1>{title}</h1>
            <NewTodoForm />
            <TodoListView />
            <p class="todo-count">
                {move || store.with(|state| {
                    if state.is_empty() {
                        "Nothing to do".to_string()
                    } else {
                        format!(
                            "{} items, {} completed, {} left",
                            state.len(),
                            state.completed_count(),
                            state.remaining_count(),
                        )
                    }
                })}
            </p>
        </section>
    }
}
