//! Task Manager Component
//!
//! Entry form, stats overview, filters and the task list.

use leptos::prelude::*;

use crate::components::{FilterBar, NewTaskForm, TaskRow};
use crate::store::{store_stats, store_visible_tasks, use_app_store, AppStateStoreFields};

#[component]
pub fn TaskManager() -> impl IntoView {
    let store = use_app_store();
    let stats = Memo::new(move |_| store_stats(&store));
    let visible = Memo::new(move |_| store_visible_tasks(&store));
    let has_tasks = move || stats.with(|s| s.total > 0);

    view! {
        <div class="task-manager">
            <header class="task-manager-header">
                <h2>"My Tasks"</h2>
                <p class="subtitle">"Stay organized and get things done"</p>
            </header>

            <NewTaskForm />

            <Show when=has_tasks>
                <div class="stats-grid">
                    <div class="stat-card">
                        <span class="stat-value">{move || stats.get().total}</span>
                        <span class="stat-label">"Total"</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-value">{move || stats.get().remaining}</span>
                        <span class="stat-label">"Active"</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-value">{move || stats.get().completed}</span>
                        <span class="stat-label">"Completed"</span>
                    </div>
                </div>
            </Show>

            <FilterBar />

            <div class="task-list">
                <Show
                    when=move || visible.with(|tasks| !tasks.is_empty())
                    fallback=move || view! {
                        <p class="empty-state">{move || store.filter().get().empty_message()}</p>
                    }
                >
                    // Keyed on content so edits and toggles re-render the row
                    <For
                        each=move || visible.get()
                        key=|task| (task.id, task.text.clone(), task.completed)
                        children=move |task| view! { <TaskRow task=task /> }
                    />
                </Show>
            </div>

            <Show when=has_tasks>
                <div class="progress">
                    <div class="progress-track">
                        <div
                            class="progress-fill"
                            style:width=move || format!("{}%", stats.get().percent_complete())
                        ></div>
                    </div>
                    <span class="progress-label">
                        {move || format!("{}% complete", stats.get().percent_complete())}
                    </span>
                </div>
            </Show>
        </div>
    }
}
