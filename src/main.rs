//! Task Manager Frontend Entry Point

mod models;
mod storage;
mod task_store;
mod filter;
mod pagination;
mod config;
mod api;
mod panel;
mod theme;
mod context;
mod store;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_build_env();
    if let Err(e) = console_logger::init(config.log_level) {
        let message = format!("Logger already installed: {}", e);
        web_sys::console::warn_1(&wasm_bindgen::JsValue::from_str(&message));
    }
    log::info!("[Main] Starting task manager");

    mount_to_body(move || view! { <App config=config /> });
}
