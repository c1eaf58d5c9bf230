//! Delete Confirm Button Component
//!
//! Two-step delete: a trash button swaps to an inline ✓/✗ prompt.

use leptos::prelude::*;

/// Inline delete confirmation
///
/// * `button_class` - CSS class for the trash button
/// * `prompt` - text next to the ✓/✗ buttons
/// * `on_confirm` - runs when ✓ is clicked
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into, default = "Delete?".to_string())] prompt: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let armed = RwSignal::new(false);

    move || {
        if !armed.get() {
            return view! {
                <button
                    class=button_class.clone()
                    aria-label="Delete task"
                    on:click=move |_| armed.set(true)
                >
                    "🗑️"
                </button>
            }
            .into_any();
        }

        view! {
            <span
                class="delete-confirm"
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Escape" {
                        armed.set(false);
                    }
                }
            >
                <span class="delete-confirm-text">{prompt.clone()}</span>
                <button
                    class="confirm-btn"
                    aria-label="Confirm delete"
                    on:click=move |_| {
                        armed.set(false);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button class="cancel-btn" aria-label="Cancel delete" on:click=move |_| armed.set(false)>
                    "✗"
                </button>
            </span>
        }
        .into_any()
    }
}
