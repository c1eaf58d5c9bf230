//! Theme Preference
//!
//! Light/dark preference persisted next to the tasks and applied as the
//! `dark` class on the document element.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::storage::{load_or_default, persist_or_log, KeyValueStorage};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Label for the toggle button (what clicking switches to)
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }
    }

    pub fn load<S: KeyValueStorage + ?Sized>(storage: &S, key: &str) -> Self {
        load_or_default(storage, key)
    }

    pub fn save<S: KeyValueStorage + ?Sized>(self, storage: &S, key: &str) {
        persist_or_log(storage, key, &self);
    }
}

/// Set or clear the `dark` class on `<html>`
pub fn apply_theme(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        warn!("[Theme] No document element to style");
        return;
    };
    let classes = root.class_list();
    let result = match theme {
        Theme::Dark => classes.add_1("dark"),
        Theme::Light => classes.remove_1("dark"),
    };
    if let Err(e) = result {
        warn!("[Theme] Failed to update class list: {:?}", e);
    }
}
