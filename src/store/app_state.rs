//! Persisted application shell state (view, login flag, active course).
//!
//! The record survives reloads so the app can reopen where the user left
//! off. The stored login flag is advisory only: a missing bearer token
//! always overrides it back to a logged-out welcome state.

#[cfg(test)]
#[path = "app_state_test.rs"]
mod app_state_test;

use serde::{Deserialize, Serialize};

/// Storage key for the app-state document.
pub const TABLE_KEY: &str = "app_state";

/// Top-level screens the shell can restore to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Welcome,
    Auth,
    Student,
    Dashboard,
}

impl View {
    /// Router path this view lives at.
    pub fn path(self) -> &'static str {
        match self {
            Self::Welcome => "/",
            Self::Auth => "/login",
            Self::Student => "/courses",
            Self::Dashboard => "/dashboard",
        }
    }
}

/// The single persisted shell-state record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppStateRecord {
    pub view: View,
    pub logged_in: bool,
    #[serde(default)]
    pub active_course_id: Option<String>,
    #[serde(default)]
    pub updated_ms: f64,
}

/// Partial update overlaid onto the stored record on save.
#[derive(Clone, Debug, Default)]
pub struct AppStateUpdate {
    pub view: Option<View>,
    pub logged_in: Option<bool>,
    /// `Some(None)` clears the active course; `None` leaves it untouched.
    pub active_course_id: Option<Option<String>>,
}

/// Overlay `update` onto `current`, stamping the update time.
pub fn merge(current: AppStateRecord, update: &AppStateUpdate, now_ms: f64) -> AppStateRecord {
    AppStateRecord {
        view: update.view.unwrap_or(current.view),
        logged_in: update.logged_in.unwrap_or(current.logged_in),
        active_course_id: update
            .active_course_id
            .clone()
            .unwrap_or(current.active_course_id),
        updated_ms: now_ms,
    }
}

/// Load the stored record, defaulting to a fresh welcome state.
pub fn load() -> AppStateRecord {
    super::load_table(TABLE_KEY).unwrap_or_default()
}

/// Merge `update` into the stored record and write it back.
pub fn save(update: &AppStateUpdate) {
    let merged = merge(load(), update, crate::util::format::now_ms());
    super::save_table(TABLE_KEY, &merged);
}

/// Reset the record to logged-out welcome (logout, stale-token override).
pub fn reset_logged_out() {
    save(&AppStateUpdate {
        view: Some(View::Welcome),
        logged_in: Some(false),
        active_course_id: Some(None),
    });
}
