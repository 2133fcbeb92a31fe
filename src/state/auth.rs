//! Session-identity state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The shell and every identity-scoped screen read this state to decide what
//! to render and which owner id to thread through backend reads.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::Profile;

/// Identity state tracking the signed-in profile and resolution status.
///
/// `loading` starts true so the shell shows the resolving spinner until the
/// session lookup settles; `profile` stays `None` when signed out.
#[derive(Clone, Debug)]
pub struct AuthState {
    pub profile: Option<Profile>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            profile: None,
            loading: true,
        }
    }
}

impl AuthState {
    /// Owner id to scope reads/writes by, when signed in.
    pub fn owner_id(&self) -> Option<&str> {
        self.profile.as_ref().map(|p| p.id.as_str())
    }
}
