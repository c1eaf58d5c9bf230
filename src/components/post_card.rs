//! Post Card Component
//!
//! A post with its author and a lazily loaded comment thread.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::models::{Comment, Post};

/// Comment thread state: not loaded, loaded, or failed with a message
type CommentsState = Option<Result<Vec<Comment>, String>>;

#[component]
pub fn PostCard(post: Post, #[prop(into)] author: Signal<Option<String>>) -> impl IntoView {
    let ctx = use_app_context();

    let post_id = post.id;
    let user_id = post.user_id;
    let body_len = post.body.chars().count();

    let (show_comments, set_show_comments) = signal(false);
    let (loading, set_loading) = signal(false);
    let comments = RwSignal::new(CommentsState::None);

    let toggle_comments = move |_: web_sys::MouseEvent| {
        let show = !show_comments.get_untracked();
        set_show_comments.set(show);
        let loaded = matches!(comments.get_untracked(), Some(Ok(_)));
        if !show || loaded || loading.get_untracked() {
            return;
        }
        set_loading.set(true);
        let client = ctx.client();
        spawn_local(async move {
            let result = client
                .fetch_comments(post_id)
                .await
                .map_err(|_| "Failed to load comments.".to_string());
            comments.set(Some(result));
            set_loading.set(false);
        });
    };

    let thread = move || match comments.get() {
        None => view! { <p class="comments-status">"Loading comments..."</p> }.into_any(),
        Some(Err(message)) => view! { <p class="comments-status error">{message}</p> }.into_any(),
        Some(Ok(list)) if list.is_empty() => {
            view! { <p class="comments-status">"No comments"</p> }.into_any()
        }
        Some(Ok(list)) => view! {
            <ul class="comment-list">
                {list
                    .into_iter()
                    .map(|c| view! {
                        <li class="comment">
                            <span class="comment-name">{c.name}</span>
                            <span class="comment-email">{c.email}</span>
                            <p>{c.body}</p>
                        </li>
                    })
                    .collect_view()}
            </ul>
        }
        .into_any(),
    };

    view! {
        <div class="card post-card">
            <h3 class="card-title">{format!("Post #{}", post_id)}</h3>
            <h4 class="post-title">{post.title}</h4>
            <p class="post-body">{post.body}</p>
            <div class="card-meta">
                <span>
                    {move || match author.get() {
                        Some(name) => format!("By {}", name),
                        None => format!("User ID: {}", user_id),
                    }}
                </span>
                <span>{format!("{} chars", body_len)}</span>
            </div>
            <button class="btn link small" on:click=toggle_comments>
                {move || if show_comments.get() { "Hide comments" } else { "Show comments" }}
            </button>
            <Show when=move || show_comments.get()>
                {thread}
            </Show>
        </div>
    }
}
