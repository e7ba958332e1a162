//! TaskChat Frontend App
//!
//! Root component: session guard, page routing, and context provisioning.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::{AuthForm, AuthMode, ChatLayout, Landing, TasksPage, ToastHost, Toaster};
use crate::context::SessionContext;
use crate::session;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Page {
    Home,
    Tasks,
    Login,
    Register,
}

impl Page {
    pub fn to_path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Tasks => "/tasks",
            Page::Login => "/login",
            Page::Register => "/register",
        }
    }

    pub fn from_path(path: &str) -> Self {
        match path {
            "/tasks" => Page::Tasks,
            "/login" => Page::Login,
            "/register" => Page::Register,
            _ => Page::Home,
        }
    }
}

/// Navigation handle provided via context
#[derive(Clone, Copy)]
pub struct Nav {
    set_page: WriteSignal<Page>,
}

impl Nav {
    /// Switch pages and keep the browser URL in sync
    pub fn go(&self, page: Page) {
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(page.to_path()));
        }
        self.set_page.set(page);
    }
}

pub fn use_nav() -> Nav {
    expect_context::<Nav>()
}

fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Keep the page signal in sync with browser back/forward buttons
fn setup_popstate_listener(set_page: WriteSignal<Page>) {
    let callback = Closure::wrap(Box::new(move |_event: web_sys::PopStateEvent| {
        set_page.set(Page::from_path(&current_path()));
    }) as Box<dyn FnMut(_)>);

    if let Some(window) = web_sys::window() {
        let _ = window
            .add_event_listener_with_callback("popstate", callback.as_ref().unchecked_ref());
    }

    callback.forget();
}

#[component]
pub fn App() -> impl IntoView {
    let (authenticated, set_authenticated) = signal(session::is_authenticated());
    let (page, set_page) = signal(Page::from_path(&current_path()));

    // Provide context to all children
    provide_context(SessionContext::new((authenticated, set_authenticated)));
    provide_context(Nav { set_page });
    provide_context(Toaster::new());

    setup_popstate_listener(set_page);

    view! {
        <ToastHost />
        {move || match page.get() {
            Page::Login => view! { <AuthForm mode=AuthMode::Login /> }.into_any(),
            Page::Register => view! { <AuthForm mode=AuthMode::Register /> }.into_any(),
            Page::Tasks => {
                if authenticated.get() {
                    view! { <TasksPage /> }.into_any()
                } else {
                    view! { <Landing /> }.into_any()
                }
            }
            Page::Home => {
                if authenticated.get() {
                    view! { <ChatLayout /> }.into_any()
                } else {
                    view! { <Landing /> }.into_any()
                }
            }
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_paths_roundtrip() {
        for page in [Page::Home, Page::Tasks, Page::Login, Page::Register] {
            assert_eq!(Page::from_path(page.to_path()), page);
        }
    }

    #[test]
    fn test_unknown_path_falls_back_to_home() {
        assert_eq!(Page::from_path("/nope"), Page::Home);
    }
}
