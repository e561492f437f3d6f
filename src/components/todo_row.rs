//! Todo Row Component
//!
//! A single record, rendered either as a display row or an inline editor.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::models::Todo;
use crate::store::{self, use_todo_store};

/// A single todo row
#[component]
pub fn TodoRow(todo: Todo) -> impl IntoView {
    let store = use_todo_store();
    let id = todo.id;

    if todo.is_editing {
        let save = move || {
            web_sys::console::log_1(&format!("[TODO] Save #{}", id).into());
            store::store_save_edit(&store, id);
        };
        let cancel = move || {
            web_sys::console::log_1(&format!("[TODO] Cancel edit #{}", id).into());
            store::store_cancel_edit(&store, id);
        };

        view! {
            <li class="todo-row editing">
                <input
                    type="text"
                    class="todo-edit-input"
                    prop:value=todo.edit_text
                    on:input=move |ev| {
                        let Some(input) = ev
                            .target()
                            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                        else {
                            return;
                        };
                        store::store_set_edit_text(&store, id, input.value());
                    }
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        match ev.key().as_str() {
                            "Enter" => save(),
                            "Escape" => cancel(),
                            _ => {}
                        }
                    }
                />
                <button class="save-btn" on:click=move |_| save()>"Save"</button>
                <button class="cancel-btn" on:click=move |_| cancel()>"Cancel"</button>
            </li>
        }
        .into_any()
    } else {
        let completed = todo.completed;

        view! {
            <li
                class=if completed { "todo-row completed" } else { "todo-row" }
                style=if completed { "text-decoration: line-through;" } else { "text-decoration: none;" }
            >
                <input
                    type="checkbox"
                    checked=completed
                    on:change=move |_| {
                        web_sys::console::log_1(&format!("[TODO] Toggle #{}", id).into());
                        store::store_toggle_complete(&store, id);
                    }
                />
                <span class="todo-text">{todo.text}</span>
                <button class="delete-btn" on:click=move |_| {
                    web_sys::console::log_1(&format!("[TODO] Delete #{}", id).into());
                    store::store_delete_todo(&store, id);
                }>"Delete"</button>
                <button class="edit-btn" on:click=move |_| {
                    web_sys::console::log_1(&format!("[TODO] Edit #{}", id).into());
                    store::store_begin_edit(&store, id);
                }>"Edit"</button>
            </li>
        }
        .into_any()
    }
}
