//! API Data Panel Component
//!
//! Posts and photos from the remote API with tabs, a debounced search box,
//! an album filter, pagination and a retry card on failure.

use std::collections::HashMap;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_debounce::debounced_signal;
use log::warn;

use crate::components::{PaginationBar, PhotoCard, PostCard};
use crate::config::{ALBUMS_LIMIT, SEARCH_DEBOUNCE_MS};
use crate::context::{use_app_context, AppContext};
use crate::models::{Album, User};
use crate::panel::{execute, PanelRequest, Tab};
use crate::store::AppStateStoreFields;

/// Fetch `request` in the background and hand the outcome to the panel
fn run(ctx: AppContext, request: PanelRequest) {
    let client = ctx.client();
    spawn_local(async move {
        let result = execute(&client, &request).await;
        ctx.store.panel().write().finish(&request, result);
    });
}

/// User id -> display name
fn author_names(users: Vec<User>) -> HashMap<u32, String> {
    users.into_iter().map(|u| (u.id, u.name)).collect()
}

/// Album select value; the empty option means every album
fn parse_album(value: &str) -> Option<u32> {
    value.trim().parse().ok()
}

#[component]
pub fn ApiDataPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let authors = RwSignal::new(HashMap::<u32, String>::new());
    let albums = RwSignal::new(Vec::<Album>::new());

    let (query_input, set_query_input) = signal(String::new());
    let debounced_query = debounced_signal(query_input, SEARCH_DEBOUNCE_MS);

    let active_tab = Memo::new(move |_| store.panel().read().tab);
    let is_loading = Memo::new(move |_| store.panel().read().is_loading());
    let error = Memo::new(move |_| store.panel().read().error().map(str::to_string));
    let current_page = Memo::new(move |_| store.panel().read().page);
    let total_pages = Memo::new(move |_| store.panel().read().total_pages());
    let page_posts = Memo::new(move |_| store.panel().read().page_posts().to_vec());
    let page_photos = Memo::new(move |_| store.panel().read().page_photos().to_vec());
    let summary = Memo::new(move |_| store.panel().read().summary());
    let ready = move || !is_loading.get() && error.with(|e| e.is_none());

    // Initial load plus the lookups used to decorate cards
    Effect::new(move |_| {
        let request = store.panel().write().switch_tab(Tab::Posts);
        run(ctx, request);

        let client = ctx.client();
        spawn_local(async move {
            match client.fetch_users().await {
                Ok(users) => authors.set(author_names(users)),
                Err(e) => warn!("[ApiPanel] Author names unavailable: {}", e),
            }
            match client.fetch_albums(Some(ALBUMS_LIMIT)).await {
                Ok(list) => albums.set(list),
                Err(e) => warn!("[ApiPanel] Album list unavailable: {}", e),
            }
        });
    });

    // Search once typing settles; skips the mount run
    Effect::new(move |prev: Option<()>| {
        let query = debounced_query.get();
        if prev.is_none() {
            return;
        }
        let request = store.panel().write().apply_search(&query);
        if let Some(request) = request {
            run(ctx, request);
        }
    });

    let select_tab = move |tab: Tab| {
        if active_tab.get_untracked() == tab {
            store.panel().write().set_page(1);
            return;
        }
        if !query_input.with_untracked(String::is_empty) {
            set_query_input.set(String::new());
        }
        let request = store.panel().write().switch_tab(tab);
        run(ctx, request);
    };

    let retry = move |_: web_sys::MouseEvent| {
        let request = store.panel().write().retry();
        if let Some(request) = request {
            run(ctx, request);
        }
    };

    let select_album = move |ev: web_sys::Event| {
        let request = store.panel().write().set_album(parse_album(&event_target_value(&ev)));
        run(ctx, request);
    };

    view! {
        <div class="api-panel">
            <div class="section-heading">
                <h2>"API Data Integration"</h2>
                <p class="subtitle">"Data fetched from JSONPlaceholder API with search and pagination"</p>
            </div>

            <div class="tab-bar">
                {Tab::ALL
                    .into_iter()
                    .map(|tab| {
                        let class = move || {
                            if active_tab.get() == tab { "btn primary small" } else { "btn secondary small" }
                        };
                        view! {
                            <button class=class on:click=move |_| select_tab(tab)>
                                {move || format!("{} ({})", tab.label(), store.panel().read().count_for(tab))}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <Show when=move || active_tab.get() == Tab::Posts>
                <div class="search-box">
                    <input
                        type="text"
                        placeholder="Search posts..."
                        prop:value=move || query_input.get()
                        on:input=move |ev| set_query_input.set(event_target_value(&ev))
                    />
                </div>
            </Show>

            <Show when=move || active_tab.get() == Tab::Photos>
                <div class="album-filter">
                    <select
                        prop:value=move || {
                            store.panel().read().album_id.map(|id| id.to_string()).unwrap_or_default()
                        }
                        on:change=select_album
                    >
                        <option value="">"All albums"</option>
                        <For
                            each=move || albums.get()
                            key=|album| album.id
                            children=move |album| view! {
                                <option value=album.id.to_string()>
                                    {format!("#{} {}", album.id, album.title)}
                                </option>
                            }
                        />
                    </select>
                </div>
            </Show>

            <Show when=move || is_loading.get()>
                <div class="loading">
                    <div class="spinner"></div>
                </div>
            </Show>

            {move || error.get().map(|message| view! {
                <div class="card error-card">
                    <p>{message}</p>
                    <button class="btn primary" on:click=retry>"Try Again"</button>
                </div>
            })}

            <Show when=ready>
                <Show
                    when=move || active_tab.get() == Tab::Posts
                    fallback=move || view! {
                        <div class="card-grid photos">
                            <For
                                each=move || page_photos.get()
                                key=|photo| photo.id
                                children=move |photo| view! { <PhotoCard photo=photo /> }
                            />
                        </div>
                    }
                >
                    <div class="card-grid posts">
                        <For
                            each=move || page_posts.get()
                            key=|post| post.id
                            children=move |post| {
                                let user_id = post.user_id;
                                let author = Signal::derive(move || authors.with(|names| names.get(&user_id).cloned()));
                                view! { <PostCard post=post author=author /> }
                            }
                        />
                    </div>
                </Show>

                <PaginationBar
                    current=current_page
                    total=total_pages
                    on_select=move |page| store.panel().write().set_page(page)
                    on_prev=move |_| store.panel().write().prev_page()
                    on_next=move |_| store.panel().write().next_page()
                />

                <p class="data-summary">{move || summary.get()}</p>
            </Show>
        </div>
    }
}
