//! Task Row Component
//!
//! A single task with checkbox, in-place editing and delete.

use chrono::{DateTime, Local, Utc};
use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::models::{Task, MAX_TASK_LEN};
use crate::store::AppStateStoreFields;

fn format_created(created_at: &DateTime<Utc>) -> String {
    created_at.with_timezone(&Local).format("%b %-d, %Y").to_string()
}

/// A single task row
#[component]
pub fn TaskRow(task: Task) -> impl IntoView {
    let ctx = use_app_context();

    let id = task.id;
    let completed = task.completed;
    let text = task.text.clone();
    let created = format_created(&task.created_at);

    let is_editing = move || ctx.store.editing().get() == Some(id);

    let on_keydown = move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
        "Enter" => ctx.save_edit(),
        "Escape" => ctx.stop_editing(),
        _ => {}
    };

    view! {
        <div class=move || if completed { "task-row completed" } else { "task-row" }>
            <input
                type="checkbox"
                checked=completed
                on:change=move |_| ctx.toggle_task(id)
            />

            <Show
                when=is_editing
                fallback=move || view! {
                    <div class="task-body">
                        <span class="task-text">{text.clone()}</span>
                        <div class="task-created">"Created: " {created.clone()}</div>
                    </div>
                }
            >
                <div class="task-edit">
                    <input
                        type="text"
                        maxlength=MAX_TASK_LEN.to_string()
                        prop:value=move || ctx.store.draft().get()
                        on:input=move |ev| ctx.set_draft(event_target_value(&ev))
                        on:keydown=on_keydown
                        autofocus=true
                    />
                    <button class="btn success small" on:click=move |_| ctx.save_edit()>"Save"</button>
                    <button class="btn secondary small" on:click=move |_| ctx.stop_editing()>"Cancel"</button>
                </div>
            </Show>

            <Show when=move || !is_editing()>
                <div class="task-actions">
                    <button class="btn secondary small" aria-label="Edit task" on:click=move |_| ctx.start_editing(id)>
                        "✏️"
                    </button>
                    <DeleteConfirmButton
                        button_class="btn danger small"
                        on_confirm=move |_| ctx.remove_task(id)
                    />
                </div>
            </Show>
        </div>
    }
}
