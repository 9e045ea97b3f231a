//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as an app-level `RwSignal<AuthState>` context. Route guards and
//! user-aware components read it to coordinate redirects and identity.

use crate::net::types::User;
use crate::util::session;

/// Authentication state tracking the signed-in user.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
}

impl AuthState {
    /// State restored from the persisted session, if one exists.
    pub fn restored() -> Self {
        Self { user: session::load() }
    }
}
