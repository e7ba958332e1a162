//! Sidebar Component
//!
//! Conversation list and user menu. All mutations are delegated to the chat
//! layout through callbacks; the sidebar only renders state.

use leptos::prelude::*;

use crate::api::auth::UpdateProfileRequest;
use crate::app::{use_nav, Page};
use crate::components::chat::ConversationItem;
use crate::store::{use_chat_store, ChatStateStoreFields};

#[component]
pub fn Sidebar(
    is_collapsed: ReadSignal<bool>,
    #[prop(into)] on_toggle_collapse: Callback<()>,
    #[prop(into)] on_new_chat: Callback<()>,
    #[prop(into)] on_select: Callback<String>,
    #[prop(into)] on_rename: Callback<(String, String)>,
    #[prop(into)] on_delete: Callback<String>,
    #[prop(into)] on_logout: Callback<()>,
    #[prop(into)] on_update_profile: Callback<UpdateProfileRequest>,
) -> impl IntoView {
    let store = use_chat_store();
    let nav = use_nav();

    let (profile_open, set_profile_open) = signal(false);
    let (edit_name, set_edit_name) = signal(String::new());
    let (edit_picture, set_edit_picture) = signal(String::new());

    let open_profile = move |_| {
        let profile = store.profile().get();
        set_edit_name.set(
            profile
                .as_ref()
                .and_then(|p| p.full_name.clone())
                .unwrap_or_default(),
        );
        set_edit_picture.set(
            profile
                .as_ref()
                .and_then(|p| p.profile_picture.clone())
                .unwrap_or_default(),
        );
        set_profile_open.set(true);
    };

    let save_profile = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let request = UpdateProfileRequest {
            full_name: Some(edit_name.get()).filter(|v| !v.is_empty()),
            profile_picture: Some(edit_picture.get()).filter(|v| !v.is_empty()),
        };
        on_update_profile.run(request);
        set_profile_open.set(false);
    };

    view! {
        <aside class=move || if is_collapsed.get() { "sidebar collapsed" } else { "sidebar" }>
            <div class="sidebar-header">
                <button class="new-chat-btn" on:click=move |_| on_new_chat.run(())>
                    "+ New chat"
                </button>
                <button
                    class="icon-btn"
                    title="Hide sidebar"
                    on:click=move |_| on_toggle_collapse.run(())
                >
                    "⟨"
                </button>
            </div>

            <div class="conversation-list">
                {move || {
                    let conversations = store.conversations().get();
                    if conversations.is_empty() {
                        view! {
                            <div class="sidebar-empty">
                                "No conversations yet." <br /> "Start a new chat!"
                            </div>
                        }.into_any()
                    } else {
                        view! {
                            <For
                                each=move || store.conversations().get()
                                key=|conversation| (conversation.id.clone(), conversation.title.clone())
                                children=move |conversation| {
                                    view! {
                                        <ConversationItem
                                            conversation=conversation
                                            on_select=on_select
                                            on_rename=on_rename
                                            on_delete=on_delete
                                        />
                                    }
                                }
                            />
                        }.into_any()
                    }
                }}
            </div>

            <div class="sidebar-footer">
                <button class="link-btn" on:click=move |_| nav.go(Page::Tasks)>
                    "My Tasks"
                </button>

                <div class="user-block">
                    {move || {
                        match store.profile().get() {
                            Some(profile) => {
                                let name = profile.display_name();
                                let email = profile.email.clone();
                                match profile.profile_picture.clone().filter(|p| !p.is_empty()) {
                                    Some(picture) => view! {
                                        <img class="avatar" src=picture alt=name.clone() />
                                        <div class="user-info">
                                            <span class="user-name">{name}</span>
                                            <span class="user-email">{email}</span>
                                        </div>
                                    }.into_any(),
                                    None => view! {
                                        <div class="avatar letter">{profile.avatar_letter()}</div>
                                        <div class="user-info">
                                            <span class="user-name">{name}</span>
                                            <span class="user-email">{email}</span>
                                        </div>
                                    }.into_any(),
                                }
                            }
                            None => view! { <div class="avatar letter">"?"</div> }.into_any(),
                        }
                    }}
                    <span class="user-actions">
                        <button class="icon-btn" title="Profile settings" on:click=open_profile>
                            "⚙"
                        </button>
                        <button
                            class="icon-btn danger"
                            title="Log out"
                            on:click=move |_| on_logout.run(())
                        >
                            "⎋"
                        </button>
                    </span>
                </div>
            </div>

            <Show when=move || profile_open.get()>
                <div class="dialog-overlay">
                    <div class="dialog">
                        <h3>"Profile Settings"</h3>
                        <p class="dialog-description">"Update your profile information."</p>
                        <form on:submit=save_profile.clone()>
                            <label for="profile-email">"Email"</label>
                            <input
                                id="profile-email"
                                type="text"
                                prop:value=move || {
                                    store.profile().get().map(|p| p.email).unwrap_or_default()
                                }
                                disabled=true
                            />
                            <label for="profile-name">"Full Name"</label>
                            <input
                                id="profile-name"
                                type="text"
                                placeholder="Enter your full name"
                                prop:value=move || edit_name.get()
                                on:input=move |ev| set_edit_name.set(event_target_value(&ev))
                            />
                            <label for="profile-picture">"Profile Picture URL"</label>
                            <input
                                id="profile-picture"
                                type="text"
                                placeholder="https://example.com/avatar.jpg"
                                prop:value=move || edit_picture.get()
                                on:input=move |ev| set_edit_picture.set(event_target_value(&ev))
                            />
                            <div class="dialog-actions">
                                <button
                                    type="button"
                                    class="outline-btn"
                                    on:click=move |_| set_profile_open.set(false)
                                >
                                    "Cancel"
                                </button>
                                <button type="submit" class="primary-btn">"Save Changes"</button>
                            </div>
                        </form>
                    </div>
                </div>
            </Show>
        </aside>
    }
}

/// Floating button that restores a collapsed sidebar
#[component]
pub fn SidebarToggle(#[prop(into)] on_click: Callback<()>) -> impl IntoView {
    view! {
        <button
            class="sidebar-toggle"
            title="Show sidebar"
            on:click=move |_| on_click.run(())
        >
            "⟩"
        </button>
    }
}
