//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The persisted
//! task collection lives in `TaskStore`; this store holds the rendered copy
//! plus view state.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::filter::{filter_tasks, TaskFilter};
use crate::models::{Task, TaskId, TaskStats};
use crate::panel::PanelState;
use crate::theme::Theme;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Tasks in insertion order, mirrored from the persisted store
    pub tasks: Vec<Task>,
    /// Active list filter
    pub filter: TaskFilter,
    /// Task currently being edited in place
    pub editing: Option<TaskId>,
    /// Unsaved text of the task being edited; outlives row re-renders
    pub draft: String,
    /// Remote data panel
    pub panel: PanelState,
    pub theme: Theme,
}

impl AppState {
    pub fn new(tasks: Vec<Task>, theme: Theme) -> Self {
        Self {
            tasks,
            theme,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the rendered task list
pub fn store_set_tasks(store: &AppStore, tasks: &[Task]) {
    store.tasks().set(tasks.to_vec());
}

/// Open the in-place editor on `task`, seeded with its text
pub fn store_start_editing(store: &AppStore, task: &Task) {
    store.draft().set(task.text.clone());
    store.editing().set(Some(task.id));
}

pub fn store_stop_editing(store: &AppStore) {
    store.editing().set(None);
    store.draft().set(String::new());
}

/// Tasks passing the active filter
pub fn store_visible_tasks(store: &AppStore) -> Vec<Task> {
    let filter = store.filter().get();
    filter_tasks(&store.tasks().read(), filter)
}

/// Stats over all tasks, regardless of filter
pub fn store_stats(store: &AppStore) -> TaskStats {
    TaskStats::from_tasks(&store.tasks().read())
}
