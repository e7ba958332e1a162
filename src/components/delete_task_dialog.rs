//! Delete Task Dialog Component
//!
//! Confirmation dialog for deleting tasks. The delete is not optimistic:
//! the row disappears only after the server confirms, and a failure keeps
//! the dialog open with the error shown.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::use_toaster;
use crate::models::Task;

#[component]
pub fn DeleteTaskDialog(
    task: Task,
    open: ReadSignal<bool>,
    set_open: WriteSignal<bool>,
    #[prop(into)] on_deleted: Callback<String>,
) -> impl IntoView {
    let toaster = use_toaster();

    let (deleting, set_deleting) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);

    let task_id = task.id.clone();
    let on_delete = move |_| {
        if deleting.get() {
            return;
        }
        set_deleting.set(true);
        set_error.set(None);

        let id = task_id.clone();
        spawn_local(async move {
            match api::tasks::delete(&id).await {
                Ok(()) => {
                    toaster.success("Task deleted successfully!");
                    on_deleted.run(id);
                    set_open.set(false);
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[TASKS] delete failed: {}", err).into());
                    set_error.set(Some(err.detail()));
                }
            }
            set_deleting.set(false);
        });
    };

    let cancel = move |_| {
        // cancel discards the intent, nothing else
        set_error.set(None);
        set_open.set(false);
    };

    let title = task.title.clone();
    let description = task.description.clone();

    view! {
        <Show when=move || open.get()>
            <div class="dialog-overlay">
                <div class="dialog">
                    <h3>"Delete Task"</h3>
                    <p class="dialog-description">
                        "Are you sure you want to delete this task? This action cannot be undone."
                    </p>

                    <div class="dialog-preview">
                        <p class="preview-title">{title.clone()}</p>
                        {description.clone().filter(|d| !d.is_empty()).map(|d| {
                            view! { <p class="preview-description">{d}</p> }
                        })}
                    </div>

                    {move || error.get().map(|msg| view! {
                        <div class="general-error">{msg}</div>
                    })}

                    <div class="dialog-actions">
                        <button
                            type="button"
                            class="outline-btn"
                            on:click=cancel
                            disabled=move || deleting.get()
                        >
                            "Cancel"
                        </button>
                        <button
                            type="button"
                            class="danger-btn"
                            on:click=on_delete.clone()
                            disabled=move || deleting.get()
                        >
                            {move || if deleting.get() { "Deleting..." } else { "Delete Task" }}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
