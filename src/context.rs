//! Application Context
//!
//! Shared handles provided via Leptos Context API: the persisted task store,
//! the API client, and the reactive app store that components render from.

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use log::debug;

use crate::api::JsonPlaceholderClient;
use crate::config::{AppConfig, THEME_KEY};
use crate::models::{Task, TaskId};
use crate::storage::BrowserStorage;
use crate::store::{store_set_tasks, store_start_editing, store_stop_editing, AppStateStoreFields, AppStore};
use crate::task_store::TaskStore;
use crate::theme::{apply_theme, Theme};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Reactive state for rendering
    pub store: AppStore,
    /// Persisted task collection - source of truth for tasks
    tasks: StoredValue<TaskStore<BrowserStorage>>,
    client: StoredValue<JsonPlaceholderClient, LocalStorage>,
}

impl AppContext {
    pub fn new(store: AppStore, tasks: TaskStore<BrowserStorage>, config: AppConfig) -> Self {
        let client = JsonPlaceholderClient::new(&config);
        Self {
            store,
            tasks: StoredValue::new(tasks),
            client: StoredValue::new_local(client),
        }
    }

    /// Cheap clone of the shared HTTP client
    pub fn client(&self) -> JsonPlaceholderClient {
        self.client.get_value()
    }

    // ========================
    // Task Commands
    // ========================

    /// Add a task; blank text is ignored
    pub fn add_task(&self, text: &str) -> Option<Task> {
        let added = self.tasks.write_value().add(text);
        if added.is_some() {
            self.sync_tasks();
        }
        added
    }

    pub fn toggle_task(&self, id: TaskId) {
        if self.tasks.write_value().toggle(id) {
            self.sync_tasks();
        }
    }

    pub fn remove_task(&self, id: TaskId) {
        if self.tasks.write_value().remove(id) {
            if self.store.editing().get_untracked() == Some(id) {
                self.stop_editing();
            }
            self.sync_tasks();
        }
    }

    pub fn clear_completed(&self) {
        let removed = self.tasks.write_value().clear_completed();
        if removed > 0 {
            self.sync_tasks();
        }
    }

    /// Replace a task's text. Returns false for blank text or unknown id.
    pub fn update_task(&self, id: TaskId, text: &str) -> bool {
        let updated = self.tasks.write_value().update(id, text);
        if updated {
            self.sync_tasks();
        }
        updated
    }

    /// Copy the persisted collection into the reactive store
    fn sync_tasks(&self) {
        self.tasks.with_value(|tasks| {
            let stats = tasks.stats();
            debug!("[Context] Syncing {} tasks, {} completed", stats.total, stats.completed);
            store_set_tasks(&self.store, tasks.tasks());
        });
    }

    // ========================
    // Editing
    // ========================

    /// Open the editor on `id`, seeding the draft with its current text
    pub fn start_editing(&self, id: TaskId) {
        let Some(task) = self.tasks.with_value(|tasks| tasks.get(id).cloned()) else {
            return;
        };
        store_start_editing(&self.store, &task);
    }

    pub fn set_draft(&self, text: String) {
        self.store.draft().set(text);
    }

    /// Save the draft into the task being edited. The editor stays open
    /// when the draft is blank.
    pub fn save_edit(&self) {
        let Some(id) = self.store.editing().get_untracked() else {
            return;
        };
        let draft = self.store.draft().get_untracked();
        if self.update_task(id, &draft) {
            self.stop_editing();
        }
    }

    pub fn stop_editing(&self) {
        store_stop_editing(&self.store);
    }

    // ========================
    // Theme
    // ========================

    /// Flip light/dark, persist it, and restyle the page
    pub fn toggle_theme(&self) {
        let theme = self.store.theme().get_untracked().toggled();
        self.store.theme().set(theme);
        theme.save(&BrowserStorage, THEME_KEY);
        apply_theme(theme);
    }

    pub fn theme(&self) -> Theme {
        self.store.theme().get()
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
