//! Conversation Item Component
//!
//! One sidebar row: select on click, inline rename, inline delete confirm.

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::models::ConversationSummary;
use crate::store::{use_chat_store, ChatStateStoreFields};

#[component]
pub fn ConversationItem(
    conversation: ConversationSummary,
    #[prop(into)] on_select: Callback<String>,
    #[prop(into)] on_rename: Callback<(String, String)>,
    #[prop(into)] on_delete: Callback<String>,
) -> impl IntoView {
    let store = use_chat_store();

    let (renaming, set_renaming) = signal(false);
    let (draft_title, set_draft_title) = signal(conversation.title.clone());

    let id = conversation.id.clone();
    let is_active = {
        let id = id.clone();
        move || store.active_conversation_id().get().as_deref() == Some(id.as_str())
    };
    let row_class = {
        let is_active = is_active.clone();
        move || {
            if is_active() {
                "conversation-item active"
            } else {
                "conversation-item"
            }
        }
    };

    let select_id = id.clone();
    let on_click = move |_| on_select.run(select_id.clone());

    let rename_id = id.clone();
    let original_title = conversation.title.clone();
    let on_rename_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = draft_title.get().trim().to_string();
        set_renaming.set(false);
        if title.is_empty() || title == original_title {
            return;
        }
        on_rename.run((rename_id.clone(), title));
    };

    let delete_id = id.clone();
    let start_title = conversation.title.clone();

    view! {
        <div class=row_class>
            <Show when=move || !renaming.get()>
                <button class="conversation-title" on:click=on_click.clone()>
                    {conversation.title.clone()}
                </button>
                <span class="conversation-actions">
                    <button
                        class="icon-btn"
                        title="Rename conversation"
                        on:click={
                            let title = start_title.clone();
                            move |ev: web_sys::MouseEvent| {
                                ev.stop_propagation();
                                set_draft_title.set(title.clone());
                                set_renaming.set(true);
                            }
                        }
                    >
                        "✏"
                    </button>
                    <DeleteConfirmButton
                        button_class="icon-btn danger"
                        on_confirm={
                            let id = delete_id.clone();
                            Callback::new(move |()| on_delete.run(id.clone()))
                        }
                    />
                </span>
            </Show>

            <Show when=move || renaming.get()>
                <form class="rename-form" on:submit=on_rename_submit.clone()>
                    <input
                        type="text"
                        prop:value=move || draft_title.get()
                        on:input=move |ev| set_draft_title.set(event_target_value(&ev))
                    />
                    <button type="submit" class="confirm-btn">"✓"</button>
                    <button
                        type="button"
                        class="cancel-btn"
                        on:click=move |_| set_renaming.set(false)
                    >
                        "✗"
                    </button>
                </form>
            </Show>
        </div>
    }
}
