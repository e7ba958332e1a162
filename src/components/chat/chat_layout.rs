//! Chat Layout Component
//!
//! Orchestrates the conversation list, active conversation selection,
//! message history loading, and send reconciliation. Also owns profile
//! read/update and logout.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, auth::UpdateProfileRequest};
use crate::app::{use_nav, Page};
use crate::components::chat::{ChatInterface, Sidebar, SidebarToggle};
use crate::components::use_toaster;
use crate::context::SessionContext;
use crate::models::Message;
use crate::optimistic;
use crate::store::{ChatState, ChatStateStoreFields, ChatStore};

fn now_iso() -> Option<String> {
    Some(String::from(js_sys::Date::new_0().to_iso_string()))
}

#[component]
pub fn ChatLayout() -> impl IntoView {
    let session = use_context::<SessionContext>().expect("SessionContext should be provided");
    let nav = use_nav();
    let toaster = use_toaster();

    let store = ChatStore::new(ChatState::default());
    provide_context(store);

    let (initializing, set_initializing) = signal(true);
    let (loading_messages, set_loading_messages) = signal(false);
    let (sending, set_sending) = signal(false);
    let (collapsed, set_collapsed) = signal(false);

    // Monotonic counters: one orders history loads so stale responses are
    // dropped, the other hands out pending message ids.
    let load_seq = StoredValue::new(0u64);
    let pending_seq = StoredValue::new(0u64);

    // Load profile and conversation summaries on mount. No conversation is
    // auto-selected; the welcome screen shows by default.
    Effect::new(move |_| {
        spawn_local(async move {
            match api::auth::get_profile().await {
                Ok(profile) => *store.profile().write() = Some(profile),
                Err(error) => {
                    web_sys::console::error_1(
                        &format!("[CHAT] profile load failed: {}", error).into(),
                    );
                }
            }
            match api::conversations::list().await {
                Ok(summaries) => *store.conversations().write() = summaries,
                Err(error) => {
                    web_sys::console::error_1(
                        &format!("[CHAT] conversation list failed: {}", error).into(),
                    );
                }
            }
            set_initializing.set(false);
        });
    });

    // Load message history whenever the active conversation changes. A
    // response that arrives after another switch is dropped, not applied.
    Effect::new(move |_| {
        let active = store.active_conversation_id().get();
        let seq = {
            load_seq.update_value(|v| *v += 1);
            load_seq.get_value()
        };
        match active {
            None => store.messages().write().clear(),
            Some(id) => {
                set_loading_messages.set(true);
                spawn_local(async move {
                    let result = api::conversations::get(&id).await;
                    if load_seq.get_value() != seq {
                        return;
                    }
                    match result {
                        Ok(conversation) => {
                            *store.messages().write() = conversation.messages;
                        }
                        Err(error) => {
                            web_sys::console::error_1(
                                &format!("[CHAT] history load failed: {}", error).into(),
                            );
                            store.messages().write().clear();
                        }
                    }
                    set_loading_messages.set(false);
                });
            }
        }
    });

    // Optimistic send: the user message appears immediately with a pending
    // id; failure removes it again, success appends the reply.
    let on_send = Callback::new(move |content: String| {
        if sending.get_untracked() {
            return;
        }
        pending_seq.update_value(|v| *v += 1);
        let seq = pending_seq.get_value();
        let pending = crate::models::MessageId::Pending(seq);

        store
            .messages()
            .write()
            .push(Message::pending_user(seq, content.clone(), now_iso()));
        set_sending.set(true);

        let active = store.active_conversation_id().get_untracked();
        spawn_local(async move {
            match api::chat::send_message(&content, active.as_deref()).await {
                Ok(response) => {
                    if active.is_none() {
                        *store.active_conversation_id().write() =
                            Some(response.conversation_id.clone());
                    }
                    {
                        let messages_field = store.messages();
                        let mut messages = messages_field.write();
                        optimistic::confirm_send(&mut messages, &pending, response.message);
                    }
                    // the server owns conversation titles, so refresh the list
                    if let Ok(summaries) = api::conversations::list().await {
                        *store.conversations().write() = summaries;
                    }
                }
                Err(error) => {
                    web_sys::console::error_1(&format!("[CHAT] send failed: {}", error).into());
                    {
                        let messages_field = store.messages();
                        let mut messages = messages_field.write();
                        optimistic::discard_pending(&mut messages, &pending);
                    }
                    toaster.error("Failed to send message");
                }
            }
            set_sending.set(false);
        });
    });

    let on_new_chat = Callback::new(move |()| {
        *store.active_conversation_id().write() = None;
    });

    let on_select = Callback::new(move |id: String| {
        *store.active_conversation_id().write() = Some(id);
    });

    let on_rename = Callback::new(move |(id, title): (String, String)| {
        spawn_local(async move {
            match api::conversations::rename(&id, &title).await {
                Ok(()) => {
                    store.write().rename_conversation(&id, &title);
                    toaster.success("Conversation renamed");
                }
                Err(error) => {
                    web_sys::console::error_1(&format!("[CHAT] rename failed: {}", error).into());
                    toaster.error("Failed to rename conversation");
                }
            }
        });
    });

    let on_delete = Callback::new(move |id: String| {
        spawn_local(async move {
            match api::conversations::delete(&id).await {
                Ok(()) => {
                    store.write().remove_conversation(&id);
                    toaster.success("Conversation deleted");
                }
                Err(error) => {
                    web_sys::console::error_1(&format!("[CHAT] delete failed: {}", error).into());
                    toaster.error("Failed to delete conversation");
                }
            }
        });
    });

    let on_update_profile = Callback::new(move |request: UpdateProfileRequest| {
        spawn_local(async move {
            match api::auth::update_profile(&request).await {
                Ok(profile) => {
                    *store.profile().write() = Some(profile);
                    toaster.success("Profile updated");
                }
                Err(error) => {
                    web_sys::console::error_1(
                        &format!("[CHAT] profile update failed: {}", error).into(),
                    );
                    toaster.error("Failed to update profile");
                }
            }
        });
    });

    let on_logout = Callback::new(move |()| {
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
    });

    view! {
        <Show
            when=move || !initializing.get()
            fallback=|| view! {
                <div class="loading-screen">
                    <div class="spinner"></div>
                    <p>"Loading..."</p>
                </div>
            }
        >
            <div class="chat-layout">
                <Show when=move || collapsed.get()>
                    <SidebarToggle on_click=Callback::new(move |()| set_collapsed.set(false)) />
                </Show>

                <Sidebar
                    is_collapsed=collapsed
                    on_toggle_collapse=Callback::new(move |()| set_collapsed.update(|v| *v = !*v))
                    on_new_chat=on_new_chat
                    on_select=on_select
                    on_rename=on_rename
                    on_delete=on_delete
                    on_logout=on_logout
                    on_update_profile=on_update_profile
                />

                <main class="chat-main">
                    <ChatInterface
                        loading=loading_messages
                        sending=sending
                        on_send=on_send
                    />
                </main>
            </div>
        </Show>
    }
}
