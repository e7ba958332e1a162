//! Auth Form Component
//!
//! Handles both login and registration. Validation runs fully client-side
//! before any network call; structured API errors land in the general slot.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, auth::AuthRequest};
use crate::app::{use_nav, Page};
use crate::components::use_toaster;
use crate::context::SessionContext;
use crate::validation::{validate_auth_form, FieldErrors};

#[derive(Clone, Copy, PartialEq)]
pub enum AuthMode {
    Login,
    Register,
}

#[component]
pub fn AuthForm(mode: AuthMode) -> impl IntoView {
    let session = use_context::<SessionContext>().expect("SessionContext should be provided");
    let nav = use_nav();
    let toaster = use_toaster();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (errors, set_errors) = signal(FieldErrors::default());
    let (submitting, set_submitting) = signal(false);

    let is_login = mode == AuthMode::Login;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }

        let checked = validate_auth_form(&email.get(), &password.get(), !is_login);
        if checked.has_field_errors() {
            set_errors.set(checked);
            return;
        }
        set_errors.set(FieldErrors::default());
        set_submitting.set(true);

        let request = AuthRequest {
            email: email.get().trim().to_string(),
            password: password.get(),
        };
        spawn_local(async move {
            let result = if is_login {
                api::auth::login(&request).await
            } else {
                api::auth::register(&request).await
            };
            match result {
                Ok(token) => {
                    session.sign_in(&token.access_token);
                    toaster.success(if is_login {
                        "Logged in successfully!"
                    } else {
                        "Account created successfully!"
                    });
                    nav.go(Page::Home);
                }
                Err(error) => {
                    let detail = error.detail();
                    web_sys::console::error_1(&format!("[AUTH] {}", error).into());
                    toaster.error(detail.clone());
                    set_errors.update(|e| e.general = Some(detail));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <div class="auth-header">
                    <div class="brand">
                        <span class="brand-mark">"✓"</span>
                        <span class="brand-name">"Todo" <span class="accent">"App"</span></span>
                    </div>
                    <h2>{if is_login { "Welcome back" } else { "Create account" }}</h2>
                    <p class="auth-subtitle">
                        {if is_login { "Enter your credentials" } else { "Join our professional workspace" }}
                    </p>
                </div>

                <form class="auth-form" on:submit=on_submit>
                    <label for="email">"Email"</label>
                    <input
                        id="email"
                        type="email"
                        placeholder="name@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                        disabled=move || submitting.get()
                    />
                    {move || errors.get().email.map(|msg| view! { <p class="field-error">{msg}</p> })}

                    <label for="password">"Password"</label>
                    <input
                        id="password"
                        type="password"
                        placeholder="••••••••"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        disabled=move || submitting.get()
                    />
                    {move || errors.get().password.map(|msg| view! { <p class="field-error">{msg}</p> })}

                    {move || errors.get().general.map(|msg| view! {
                        <div class="general-error">{msg}</div>
                    })}

                    <button type="submit" class="primary-btn" disabled=move || submitting.get()>
                        {move || {
                            if submitting.get() {
                                "Working..."
                            } else if is_login {
                                "Sign In"
                            } else {
                                "Create Account"
                            }
                        }}
                    </button>
                </form>

                <div class="auth-footer">
                    <span>{if is_login { "New here? " } else { "Already a member? " }}</span>
                    <button
                        class="link-btn"
                        on:click=move |_| nav.go(if is_login { Page::Register } else { Page::Login })
                    >
                        {if is_login { "Register" } else { "Sign in" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
