//! Chat Interface Component
//!
//! Message history of the active conversation plus the composer. Assistant
//! replies render as markdown; a pending user message is styled as such
//! until the send settles.

use leptos::html::Div;
use leptos::prelude::*;

use crate::markdown;
use crate::models::{Message, Role};
use crate::store::{use_chat_store, ChatStateStoreFields};

#[component]
fn MessageBubble(message: Message) -> impl IntoView {
    let pending = message.id.is_pending();
    let class = match (message.role, pending) {
        (Role::User, false) => "message user",
        (Role::User, true) => "message user pending",
        (Role::Assistant, _) => "message assistant",
    };

    match message.role {
        Role::Assistant => {
            let html = markdown::render(&message.content);
            view! { <div class=class inner_html=html></div> }.into_any()
        }
        Role::User => view! { <div class=class>{message.content.clone()}</div> }.into_any(),
    }
}

#[component]
pub fn ChatInterface(
    loading: ReadSignal<bool>,
    sending: ReadSignal<bool>,
    #[prop(into)] on_send: Callback<String>,
) -> impl IntoView {
    let store = use_chat_store();

    let (draft, set_draft) = signal(String::new());
    let list_ref = NodeRef::<Div>::new();

    let has_conversation = move || store.active_conversation_id().get().is_some();
    let is_empty = move || store.messages().get().is_empty();

    // Keep the newest message in view
    Effect::new(move |_| {
        let _ = store.messages().get();
        let _ = sending.get();
        if let Some(el) = list_ref.get() {
            el.set_scroll_top(el.scroll_height());
        }
    });

    let submit = move || {
        let content = draft.get().trim().to_string();
        if content.is_empty() || sending.get() {
            return;
        }
        set_draft.set(String::new());
        on_send.run(content);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        submit();
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            submit();
        }
    };

    view! {
        <div class="chat-interface">
            <div class="message-list" node_ref=list_ref>
                {move || {
                    if loading.get() && is_empty() {
                        view! {
                            <div class="messages-loading">
                                <div class="spinner"></div>
                            </div>
                        }.into_any()
                    } else if !has_conversation() && is_empty() {
                        view! {
                            <div class="welcome-screen">
                                <h2>"How can I help you today?"</h2>
                                <p>
                                    "Ask me to add tasks, summarize what's on your plate, \
                                     or anything else. Starting to type opens a new conversation."
                                </p>
                            </div>
                        }.into_any()
                    } else {
                        view! {
                            <For
                                each=move || store.messages().get()
                                key=|message| message.id.clone()
                                children=move |message| view! { <MessageBubble message=message /> }
                            />
                        }.into_any()
                    }
                }}

                <Show when=move || sending.get()>
                    <div class="message assistant typing">
                        <span class="typing-dot"></span>
                        <span class="typing-dot"></span>
                        <span class="typing-dot"></span>
                    </div>
                </Show>
            </div>

            <form class="composer" on:submit=on_submit>
                <textarea
                    placeholder="Send a message..."
                    rows="1"
                    prop:value=move || draft.get()
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                    on:keydown=on_keydown
                ></textarea>
                <button
                    type="submit"
                    class="primary-btn"
                    disabled=move || sending.get() || draft.get().trim().is_empty()
                >
                    "Send"
                </button>
            </form>
        </div>
    }
}
