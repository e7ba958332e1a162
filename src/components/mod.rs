//! UI Components
//!
//! Reusable Leptos components.

mod auth_form;
pub mod chat;
mod delete_confirm_button;
mod delete_task_dialog;
mod landing;
mod task_form;
mod task_item;
mod task_list;
mod tasks_page;
mod toast;

pub use auth_form::{AuthForm, AuthMode};
pub use chat::ChatLayout;
pub use delete_confirm_button::DeleteConfirmButton;
pub use delete_task_dialog::DeleteTaskDialog;
pub use landing::Landing;
pub use task_form::TaskForm;
pub use task_item::TaskItem;
pub use task_list::TaskList;
pub use tasks_page::TasksPage;
pub use toast::{use_toaster, ToastHost, Toaster};
