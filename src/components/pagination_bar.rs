//! Pagination Bar Component
//!
//! Previous / numbered / Next buttons over a sliding window of pages.

use leptos::prelude::*;

use crate::config::MAX_VISIBLE_PAGES;
use crate::pagination::page_window;

fn has_prev(current: usize) -> bool {
    current > 1
}

fn has_next(current: usize, total: usize) -> bool {
    current < total
}

/// Hidden when there is a single page or none
#[component]
pub fn PaginationBar(
    #[prop(into)] current: Signal<usize>,
    #[prop(into)] total: Signal<usize>,
    #[prop(into)] on_select: Callback<usize>,
    #[prop(into)] on_prev: Callback<()>,
    #[prop(into)] on_next: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || { total.get() > 1 }>
            <div class="pagination">
                <button
                    class="btn secondary small"
                    disabled=move || { !has_prev(current.get()) }
                    on:click=move |_| on_prev.run(())
                >
                    "Previous"
                </button>
                {move || {
                    let page = current.get();
                    page_window(page, total.get(), MAX_VISIBLE_PAGES)
                        .map(|n| {
                            let class = if n == page { "btn primary small page-btn" } else { "btn secondary small page-btn" };
                            view! {
                                <button class=class on:click=move |_| on_select.run(n)>{n}</button>
                            }
                        })
                        .collect_view()
                }}
                <button
                    class="btn secondary small"
                    disabled=move || { !has_next(current.get(), total.get()) }
                    on:click=move |_| on_next.run(())
                >
                    "Next"
                </button>
            </div>
        </Show>
    }
}
