//! Application Context
//!
//! Shared state provided via Leptos Context API. The authenticated flag is
//! owned here and passed down explicitly; components never read storage on
//! their own.

use leptos::prelude::*;

use crate::session;

/// Session signals provided via context
#[derive(Clone, Copy)]
pub struct SessionContext {
    authenticated: ReadSignal<bool>,
    set_authenticated: WriteSignal<bool>,
}

impl SessionContext {
    pub fn new((authenticated, set_authenticated): (ReadSignal<bool>, WriteSignal<bool>)) -> Self {
        Self {
            authenticated,
            set_authenticated,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated.get()
    }

    /// Persist the token and flip the app into the authenticated view
    pub fn sign_in(&self, token: &str) {
        session::store_token(token);
        self.set_authenticated.set(true);
    }

    /// Local sign-out is unconditional; notifying the server is the
    /// caller's (best-effort) business
    pub fn sign_out(&self) {
        session::clear_token();
        self.set_authenticated.set(false);
    }
}
