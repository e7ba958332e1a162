//! Session Guard
//!
//! The persisted credential marker lives in browser local storage; presence
//! of the token is what "authenticated" means to this client. Components
//! never probe storage themselves: the flag travels through
//! [`crate::context::SessionContext`].

use web_sys::Storage;

const TOKEN_KEY: &str = "auth_token";

fn storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Read the persisted token, if any
pub fn load_token() -> Option<String> {
    storage()?
        .get_item(TOKEN_KEY)
        .ok()
        .flatten()
        .filter(|token| !token.is_empty())
}

pub fn store_token(token: &str) {
    if let Some(storage) = storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
}

pub fn clear_token() {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }
}

/// Read-only check, no side effects
pub fn is_authenticated() -> bool {
    load_token().is_some()
}
