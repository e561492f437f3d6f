//! New Todo Form Component
//!
//! Entry input bound to the store's entry buffer.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::config::use_todo_config;
use crate::store::{self, use_todo_store, TodoStateStoreFields};

/// Form for creating new todos. Enter in the input submits.
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let store = use_todo_store();
    let config = use_todo_config();

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let before = store.get_untracked();
        store::store_add_todo(&store);
        // blank entries are dropped silently
        let added = store.with_untracked(|state| state.added_since(&before).map(|todo| todo.id));
        if let Some(id) = added {
            web_sys::console::log_1(&format!("[TODO] Added #{}", id).into());
        }
    };

    view! {
        <form class="new-todo-form" on:submit=add_todo>
            <input
                type="text"
                placeholder=config.entry_placeholder
                prop:value=move || store.entry().get()
                on:input=move |ev| {
                    let Some(input) = ev
                        .target()
                        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                    else {
                        return;
                    };
                    store::store_set_entry_text(&store, input.value());
                }
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
