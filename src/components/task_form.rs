//! Task Form Component
//!
//! Creation form with live character counters. A non-empty error map blocks
//! submission, so invalid input never reaches the network.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, tasks::CreateTaskRequest};
use crate::components::use_toaster;
use crate::models::Task;
use crate::validation::{validate_task_form, FieldErrors, DESCRIPTION_MAX, TITLE_MAX};

#[component]
pub fn TaskForm(
    #[prop(into)] on_created: Callback<Task>,
    #[prop(optional, into)] on_cancel: Option<Callback<()>>,
) -> impl IntoView {
    let toaster = use_toaster();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (errors, set_errors) = signal(FieldErrors::default());
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }

        let checked = validate_task_form(&title.get(), &description.get());
        if checked.has_field_errors() {
            set_errors.set(checked);
            return;
        }
        set_errors.set(FieldErrors::default());
        set_submitting.set(true);

        let request = CreateTaskRequest {
            title: title.get().trim().to_string(),
            description: Some(description.get().trim().to_string()).filter(|d| !d.is_empty()),
        };
        spawn_local(async move {
            match api::tasks::create(&request).await {
                Ok(task) => {
                    set_title.set(String::new());
                    set_description.set(String::new());
                    on_created.run(task);
                }
                Err(error) => {
                    let detail = error.detail();
                    web_sys::console::error_1(&format!("[TASKS] create failed: {}", error).into());
                    toaster.error(detail.clone());
                    set_errors.update(|e| e.general = Some(detail));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form class="task-form" on:submit=on_submit>
            <label for="task-title">"Title " <span class="required">"*"</span></label>
            <input
                id="task-title"
                type="text"
                placeholder="Enter task title"
                maxlength=TITLE_MAX.to_string()
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
                disabled=move || submitting.get()
            />
            {move || errors.get().title.map(|msg| view! { <p class="field-error">{msg}</p> })}
            <p class="char-count">{move || format!("{}/{}", title.get().chars().count(), TITLE_MAX)}</p>

            <label for="task-description">"Description"</label>
            <textarea
                id="task-description"
                placeholder="Enter task description (optional)"
                rows="3"
                maxlength=DESCRIPTION_MAX.to_string()
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
                disabled=move || submitting.get()
            ></textarea>
            {move || errors.get().description.map(|msg| view! { <p class="field-error">{msg}</p> })}
            <p class="char-count">
                {move || format!("{}/{}", description.get().chars().count(), DESCRIPTION_MAX)}
            </p>

            {move || errors.get().general.map(|msg| view! {
                <div class="general-error">{msg}</div>
            })}

            <div class="task-form-actions">
                {on_cancel.map(|cancel| view! {
                    <button
                        type="button"
                        class="outline-btn"
                        on:click=move |_| cancel.run(())
                        disabled=move || submitting.get()
                    >
                        "Cancel"
                    </button>
                })}
                <button type="submit" class="primary-btn" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Creating..." } else { "+ Create Task" }}
                </button>
            </div>
        </form>
    }
}
