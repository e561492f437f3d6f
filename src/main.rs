//! Todo List Frontend Entry Point

mod models;
mod config;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = config::load_todo_config();
    mount_to_body(move || view! { <App config=config /> });
}
