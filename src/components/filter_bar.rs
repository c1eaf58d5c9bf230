//! Filter Bar Component
//!
//! All / Active / Completed buttons with counts, plus bulk clear.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::filter::TaskFilter;
use crate::store::{store_stats, AppStateStoreFields};

#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let stats = Memo::new(move |_| store_stats(&store));

    view! {
        <div class="filter-bar">
            <div class="filter-buttons">
                {TaskFilter::ALL
                    .into_iter()
                    .map(|filter| {
                        let is_active = move || store.filter().get() == filter;
                        view! {
                            <button
                                class=move || if is_active() { "filter-btn active" } else { "filter-btn" }
                                on:click=move |_| store.filter().set(filter)
                            >
                                {filter.label()}
                                <span class="filter-count">{move || stats.with(|s| filter.count(s))}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <Show when=move || stats.with(|s| s.completed > 0)>
                <button class="btn danger small" on:click=move |_| ctx.clear_completed()>
                    "Clear Completed"
                </button>
            </Show>
        </div>
    }
}
