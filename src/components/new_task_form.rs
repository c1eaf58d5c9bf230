//! New Task Form Component
//!
//! Text input with a character counter for adding tasks.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::MAX_TASK_LEN;

/// Form for creating new tasks
#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_app_context();

    let (new_text, set_new_text) = signal(String::new());
    let is_blank = move || new_text.with(|t| t.trim().is_empty());

    let create_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get();
        if ctx.add_task(&text).is_some() {
            set_new_text.set(String::new());
        }
    };

    view! {
        <form class="new-task-form" on:submit=create_task>
            <div class="new-task-row">
                <input
                    type="text"
                    placeholder="What needs to be done?"
                    maxlength=MAX_TASK_LEN.to_string()
                    prop:value=move || new_text.get()
                    on:input=move |ev| set_new_text.set(event_target_value(&ev))
                />
                <button type="submit" class="btn primary" disabled=is_blank>"Add Task"</button>
            </div>
            <div class="char-count">
                {move || format!("{}/{} characters", new_text.with(|t| t.chars().count()), MAX_TASK_LEN)}
            </div>
        </form>
    }
}
