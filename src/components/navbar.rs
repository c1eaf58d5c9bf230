//! Navbar Component
//!
//! Title, section links and the theme toggle.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <nav class="navbar">
            <a class="navbar-title" href="#home">"📋 Task Manager"</a>
            <div class="navbar-links">
                <a href="#tasks">"Tasks"</a>
                <a href="#api-data">"API Data"</a>
                <button
                    class="theme-toggle"
                    aria-label="Toggle theme"
                    on:click=move |_| ctx.toggle_theme()
                >
                    {move || ctx.theme().toggle_label()}
                </button>
            </div>
        </nav>
    }
}
