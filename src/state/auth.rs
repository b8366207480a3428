//! Authentication state derived from the stored session.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::util::session;

/// Session state: bearer token presence and role.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub token: Option<String>,
    pub role: Option<String>,
}

impl AuthState {
    /// Rebuild from the stored browser session.
    pub fn from_session() -> Self {
        Self {
            token: session::token(),
            role: session::role(),
        }
    }

    /// Guest mode: no bearer token, chat is read-only against the forum.
    pub fn is_guest(&self) -> bool {
        self.token.is_none()
    }

    /// Whether the session may open the teacher dashboard.
    pub fn is_teacher(&self) -> bool {
        self.role
            .as_deref()
            .is_some_and(session::is_teacher_role)
    }
}
