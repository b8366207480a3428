//! Browser-embedded record store for offline caching.
//!
//! DESIGN
//! ======
//! The store is a namespaced key/value document store over `localStorage`
//! with JSON serde. Each table module (`app_state`, `chat_log`, `courses`)
//! owns one document under a `coursepilot.` key and keeps its record logic
//! pure so it can be tested natively; only the load/save glue below touches
//! the browser, and it degrades to a no-op during SSR.

pub mod app_state;
pub mod chat_log;
pub mod courses;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Key prefix shared by every table document.
pub const NAMESPACE: &str = "coursepilot.";

/// Table keys, in purge order.
pub const TABLE_KEYS: [&str; 3] = [
    app_state::TABLE_KEY,
    chat_log::TABLE_KEY,
    courses::TABLE_KEY,
];

fn storage_key(table: &str) -> String {
    format!("{NAMESPACE}{table}")
}

/// Load a table document from the record store.
pub fn load_table<T: DeserializeOwned>(table: &str) -> Option<T> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(&storage_key(table)).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = table;
        None
    }
}

/// Save a table document to the record store.
pub fn save_table<T: Serialize>(table: &str, value: &T) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let Ok(raw) = serde_json::to_string(value) else {
            return;
        };
        if storage.set_item(&storage_key(table), &raw).is_err() {
            leptos::logging::warn!("record store write failed for table {table}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (table, value);
    }
}

/// Delete every table document (system panel purge, logout).
pub fn purge_all() {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        for table in TABLE_KEYS {
            let _ = storage.remove_item(&storage_key(table));
        }
    }
}

#[cfg(test)]
mod store_test {
    use super::*;

    #[test]
    fn storage_keys_are_namespaced() {
        assert_eq!(storage_key("chat_log"), "coursepilot.chat_log");
    }

    #[test]
    fn table_keys_are_distinct() {
        let mut keys = TABLE_KEYS.to_vec();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), TABLE_KEYS.len());
    }

    #[test]
    fn load_table_is_inert_outside_the_browser() {
        let loaded: Option<serde_json::Value> = load_table("app_state");
        assert!(loaded.is_none());
    }
}
