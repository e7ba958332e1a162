//! Toast Notifications
//!
//! Transient success/error messages. The handle lives in context so any
//! component can emit one; toasts dismiss themselves after a short delay.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const DISMISS_AFTER_MS: u32 = 4_000;

#[derive(Clone, Copy, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub text: String,
}

/// Handle for emitting notifications, provided via context
#[derive(Clone, Copy)]
pub struct Toaster {
    toasts: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    pub fn success(&self, text: impl Into<String>) {
        self.push(ToastKind::Success, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        self.push(ToastKind::Error, text.into());
    }

    fn push(&self, kind: ToastKind, text: String) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.toasts.update(|toasts| toasts.push(Toast { id, kind, text }));

        let toasts = self.toasts;
        spawn_local(async move {
            TimeoutFuture::new(DISMISS_AFTER_MS).await;
            toasts.update(|toasts| toasts.retain(|toast| toast.id != id));
        });
    }
}

pub fn use_toaster() -> Toaster {
    expect_context::<Toaster>()
}

/// Renders the current toasts in a fixed corner stack
#[component]
pub fn ToastHost() -> impl IntoView {
    let toaster = use_toaster();

    view! {
        <div class="toast-host">
            <For
                each=move || toaster.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let class = match toast.kind {
                        ToastKind::Success => "toast toast-success",
                        ToastKind::Error => "toast toast-error",
                    };
                    view! { <div class=class>{toast.text.clone()}</div> }
                }
            />
        </div>
    }
}
