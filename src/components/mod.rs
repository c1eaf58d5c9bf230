//! UI Components
//!
//! Reusable Leptos components.

mod navbar;
mod new_task_form;
mod filter_bar;
mod task_row;
mod task_manager;
mod delete_confirm_button;
mod api_data_panel;
mod post_card;
mod photo_card;
mod pagination_bar;
mod quote_banner;

pub use navbar::Navbar;
pub use new_task_form::NewTaskForm;
pub use filter_bar::FilterBar;
pub use task_row::TaskRow;
pub use task_manager::TaskManager;
pub use delete_confirm_button::DeleteConfirmButton;
pub use api_data_panel::ApiDataPanel;
pub use post_card::PostCard;
pub use photo_card::PhotoCard;
pub use pagination_bar::PaginationBar;
pub use quote_banner::QuoteBanner;
