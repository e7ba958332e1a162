//! Landing Page Component
//!
//! Public view shown to unauthenticated visitors.

use leptos::prelude::*;

use crate::app::{use_nav, Page};

#[component]
pub fn Landing() -> impl IntoView {
    let nav = use_nav();

    view! {
        <div class="landing">
            <nav class="landing-nav">
                <div class="brand">
                    <span class="brand-mark">"✓"</span>
                    <span class="brand-name">"Todo" <span class="accent">"App"</span></span>
                </div>
                <div class="landing-nav-actions">
                    <button class="link-btn" on:click=move |_| nav.go(Page::Login)>
                        "Sign In"
                    </button>
                    <button class="primary-btn" on:click=move |_| nav.go(Page::Register)>
                        "Join Now"
                    </button>
                </div>
            </nav>

            <main class="landing-hero">
                <span class="hero-badge">"Professional Task Management"</span>
                <h1 class="hero-title">
                    "Organize your goals." <br />
                    <span class="accent">"Simplify your life."</span>
                </h1>
                <p class="hero-subtitle">
                    "Fast, secure, and purely minimalist. Built for high-performance \
                     individuals who value their time and focus."
                </p>
                <div class="hero-actions">
                    <button class="primary-btn large" on:click=move |_| nav.go(Page::Register)>
                        "Get Started →"
                    </button>
                    <button class="outline-btn large" on:click=move |_| nav.go(Page::Login)>
                        "View Features"
                    </button>
                </div>

                <div class="feature-grid">
                    <div class="feature-card">
                        <h3>"Lightning Fast"</h3>
                        <p>"Built for speed with zero lag. Your tasks sync instantly across all devices."</p>
                    </div>
                    <div class="feature-card">
                        <h3>"Secure by Default"</h3>
                        <p>"Enterprise-grade encryption keeps your personal data safe and private."</p>
                    </div>
                    <div class="feature-card">
                        <h3>"Purely Minimalist"</h3>
                        <p>"No clutter, no distractions. Just a clean canvas for your thoughts."</p>
                    </div>
                </div>
            </main>
        </div>
    }
}
