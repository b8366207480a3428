//! Browser session storage for the bearer token and user role.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token lives in `localStorage` so a page reload keeps the session.
//! A missing token means guest mode: the chat works read-only against the
//! public forum and teacher pages redirect to the login screen.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

#[cfg(feature = "hydrate")]
const TOKEN_KEY: &str = "coursepilot_token";
#[cfg(feature = "hydrate")]
const ROLE_KEY: &str = "coursepilot_role";

/// Read the stored bearer token, if any.
pub fn token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(TOKEN_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Read the stored user role, if any.
pub fn role() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(ROLE_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the session returned by a successful login.
pub fn save(token: &str, role: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(TOKEN_KEY, token);
            let _ = storage.set_item(ROLE_KEY, role);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, role);
    }
}

/// Drop the stored token and role (logout).
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(ROLE_KEY);
        }
    }
}

/// `Authorization` header value for `token`.
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Whether `role` grants access to the teacher dashboard.
pub fn is_teacher_role(role: &str) -> bool {
    role == "teacher" || role == "admin"
}
