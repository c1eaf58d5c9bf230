//! Task Manager Frontend App
//!
//! Loads persisted state, provides context, and lays out the page.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ApiDataPanel, Navbar, QuoteBanner, TaskManager};
use crate::config::{AppConfig, TASKS_KEY, THEME_KEY};
use crate::context::AppContext;
use crate::storage::BrowserStorage;
use crate::store::{AppState, AppStore};
use crate::task_store::TaskStore;
use crate::theme::{apply_theme, Theme};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Persisted state
    let tasks = TaskStore::load(BrowserStorage, TASKS_KEY);
    let theme = Theme::load(&BrowserStorage, THEME_KEY);
    apply_theme(theme);

    let store: AppStore = Store::new(AppState::new(tasks.tasks().to_vec(), theme));

    // Provide context to all children
    provide_context(store);
    provide_context(AppContext::new(store, tasks, config));

    view! {
        <div class="app-layout">
            <Navbar />

            <main class="main-content">
                <section id="home" class="hero">
                    <h1>"Welcome to " <span class="accent">"The Task Manager"</span></h1>
                    <p class="hero-text">
                        "Organize your tasks and explore live data from a public API, "
                        "with light and dark themes."
                    </p>
                    <div class="hero-actions">
                        <a class="btn primary large" href="#tasks">"Get Started with Tasks"</a>
                        <a class="btn secondary large" href="#api-data">"Explore API Data"</a>
                    </div>
                    <QuoteBanner />
                </section>

                <section id="tasks" class="section alt">
                    <TaskManager />
                </section>

                <section id="api-data" class="section">
                    <ApiDataPanel />
                </section>
            </main>

            <footer class="footer">
                "📋 The Task Manager · Built with Rust and Leptos"
            </footer>
        </div>
    }
}
