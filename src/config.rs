//! Widget Configuration
//!
//! Settings read from the `#todo-config` JSON block in `index.html` and
//! provided to components via the Leptos Context API.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// How new todo ids are assigned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IdPolicy {
    /// Counter that only grows, ids are never reused after a delete
    #[default]
    Monotonic,
    /// `len + 1` at creation time; can repeat an id after deletions
    LengthPlusOne,
}

/// Id of the `<script type="application/json">` element holding the config
pub const CONFIG_ELEMENT_ID: &str = "todo-config";

/// Widget-wide settings. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TodoConfig {
    pub title: String,
    pub entry_placeholder: String,
    pub id_policy: IdPolicy,
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            title: "Todo List".to_string(),
            entry_placeholder: "Add new todo...".to_string(),
            id_policy: IdPolicy::default(),
        }
    }
}

impl TodoConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| e.to_string())
    }
}

/// Read the config block from the page. Falls back to defaults when the
/// element is absent or does not parse.
pub fn load_todo_config() -> TodoConfig {
    let Some(json) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content())
    else {
        return TodoConfig::default();
    };

    match TodoConfig::from_json(&json) {
        Ok(config) => {
            web_sys::console::log_1(&format!("[APP] Config loaded: {:?}", config.id_policy).into());
            config
        }
        Err(e) => {
            web_sys::console::log_1(&format!("[APP] Bad config, using defaults: {}", e).into());
            TodoConfig::default()
        }
    }
}

/// Get the config from context, falling back to defaults
pub fn use_todo_config() -> TodoConfig {
    use_context::<TodoConfig>().unwrap_or_default()
}
