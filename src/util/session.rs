//! localStorage persistence for the signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend issues no tokens, so the "session" is just the user record
//! from the last successful login or registration. Restoring it only
//! pre-fills identity for the UI; the backend still judges every request
//! on its own.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;

/// localStorage key holding the signed-in user as JSON.
pub const SESSION_KEY: &str = "findseek.session";

/// Restore the persisted user, if any. Corrupt entries read as no session.
pub fn load() -> Option<User> {
    #[cfg(feature = "csr")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(SESSION_KEY).ok().flatten()?;
        parse_stored(&raw)
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Persist `user` for the next visit.
pub fn store(user: &User) {
    #[cfg(feature = "csr")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let Ok(raw) = serde_json::to_string(user) else {
            return;
        };
        let _ = storage.set_item(SESSION_KEY, &raw);
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = user;
    }
}

/// Drop the persisted session.
pub fn clear() {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(SESSION_KEY);
        }
    }
}

#[cfg(any(test, feature = "csr"))]
fn parse_stored(raw: &str) -> Option<User> {
    serde_json::from_str(raw).ok()
}
