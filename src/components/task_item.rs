//! Task Item Component
//!
//! One task row: completion checkbox, inline edit, and delete entry point.
//! The checkbox is disabled while this task has a mutation in flight.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, tasks::UpdateTaskRequest};
use crate::components::{use_toaster, DeleteTaskDialog};
use crate::models::Task;
use crate::optimistic::InFlight;
use crate::validation::validate_task_form;

#[component]
pub fn TaskItem(
    task: Task,
    in_flight: ReadSignal<InFlight>,
    #[prop(into)] on_toggle: Callback<String>,
    #[prop(into)] on_updated: Callback<Task>,
    #[prop(into)] on_deleted: Callback<String>,
) -> impl IntoView {
    let toaster = use_toaster();

    let (editing, set_editing) = signal(false);
    let (edit_title, set_edit_title) = signal(task.title.clone());
    let (edit_description, set_edit_description) =
        signal(task.description.clone().unwrap_or_default());
    let (saving, set_saving) = signal(false);
    let (confirm_open, set_confirm_open) = signal(false);

    let id = task.id.clone();
    let is_busy = {
        let id = id.clone();
        move || in_flight.get().contains(&id)
    };

    let toggle_id = id.clone();
    let toggle = move |_| on_toggle.run(toggle_id.clone());

    let start_edit = {
        let title = task.title.clone();
        let description = task.description.clone().unwrap_or_default();
        move |_| {
            set_edit_title.set(title.clone());
            set_edit_description.set(description.clone());
            set_editing.set(true);
        }
    };

    let save_id = id.clone();
    let save_edit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if saving.get() {
            return;
        }
        let title = edit_title.get();
        let description = edit_description.get();
        if validate_task_form(&title, &description).has_field_errors() {
            toaster.error("Title is required and must fit the length limits");
            return;
        }
        set_saving.set(true);

        let id = save_id.clone();
        spawn_local(async move {
            let request = UpdateTaskRequest {
                title: Some(title.trim().to_string()),
                description: Some(description.trim().to_string()),
                ..Default::default()
            };
            match api::tasks::update(&id, &request).await {
                Ok(confirmed) => {
                    on_updated.run(confirmed);
                    set_editing.set(false);
                }
                Err(error) => {
                    web_sys::console::error_1(&format!("[TASKS] update failed: {}", error).into());
                    toaster.error(error.detail());
                }
            }
            set_saving.set(false);
        });
    };

    let completed = task.is_completed;
    let title = task.title.clone();
    let description = task.description.clone();
    let dialog_task = task.clone();

    let row_class = move || {
        if completed {
            "task-item completed"
        } else {
            "task-item"
        }
    };

    let checkbox_busy = is_busy.clone();

    view! {
        <div class=row_class>
            <Show when=move || !editing.get()>
                <div class="task-row">
                    <input
                        type="checkbox"
                        class="task-checkbox"
                        checked=completed
                        disabled=checkbox_busy.clone()
                        on:click=toggle.clone()
                    />
                    <div class="task-body">
                        <h3 class="task-title">{title.clone()}</h3>
                        {description.clone().filter(|d| !d.is_empty()).map(|d| {
                            view! { <p class="task-description">{d}</p> }
                        })}
                    </div>
                    <div class="task-actions">
                        <button class="icon-btn" title="Edit task" on:click=start_edit.clone()>
                            "✏"
                        </button>
                        <button
                            class="icon-btn danger"
                            title="Delete task"
                            on:click=move |_| set_confirm_open.set(true)
                        >
                            "🗑"
                        </button>
                    </div>
                </div>
            </Show>

            <Show when=move || editing.get()>
                <form class="task-edit-form" on:submit=save_edit.clone()>
                    <input
                        type="text"
                        prop:value=move || edit_title.get()
                        on:input=move |ev| set_edit_title.set(event_target_value(&ev))
                        disabled=move || saving.get()
                    />
                    <textarea
                        rows="2"
                        prop:value=move || edit_description.get()
                        on:input=move |ev| set_edit_description.set(event_target_value(&ev))
                        disabled=move || saving.get()
                    ></textarea>
                    <div class="task-form-actions">
                        <button
                            type="button"
                            class="outline-btn"
                            on:click=move |_| set_editing.set(false)
                            disabled=move || saving.get()
                        >
                            "Cancel"
                        </button>
                        <button type="submit" class="primary-btn" disabled=move || saving.get()>
                            {move || if saving.get() { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                </form>
            </Show>

            <DeleteTaskDialog
                task=dialog_task
                open=confirm_open
                set_open=set_confirm_open
                on_deleted=on_deleted
            />
        </div>
    }
}
