//! Tasks Page Component
//!
//! Authenticated task dashboard: header with navigation and logout, task
//! list below.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::app::{use_nav, Page};
use crate::components::{use_toaster, TaskList};
use crate::context::SessionContext;

#[component]
pub fn TasksPage() -> impl IntoView {
    let session = use_context::<SessionContext>().expect("SessionContext should be provided");
    let nav = use_nav();
    let toaster = use_toaster();

    let on_logout = move |_| {
        spawn_local(async move {
            // local sign-out happens regardless of what the server says
            match api::auth::logout().await {
                Ok(()) => toaster.success("Logged out successfully"),
                Err(error) => {
                    web_sys::console::error_1(&format!("[AUTH] logout failed: {}", error).into());
                }
            }
            session.sign_out();
            nav.go(Page::Home);
        });
    };

    view! {
        <div class="tasks-page">
            <header class="app-header">
                <div class="brand">
                    <span class="brand-mark">"✓"</span>
                    <span class="brand-name">"Todo" <span class="accent">"App"</span></span>
                </div>
                <div class="app-header-actions">
                    <button class="link-btn" on:click=move |_| nav.go(Page::Home)>
                        "Chat"
                    </button>
                    <button class="link-btn" on:click=on_logout>
                        "Logout"
                    </button>
                </div>
            </header>

            <main class="tasks-main">
                <TaskList />
            </main>
        </div>
    }
}
