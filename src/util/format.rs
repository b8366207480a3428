//! Display formatting helpers for sizes, timestamps, and session titles.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Maximum characters kept when deriving a session title from a message.
pub const TITLE_MAX_CHARS: usize = 40;

/// Human-readable megabyte label for a byte count (e.g. `"1.24 MB"`).
pub fn size_label(bytes: f64) -> String {
    format!("{:.2} MB", bytes / (1024.0 * 1024.0))
}

/// Archive title for a chat session: the first real message, truncated.
///
/// Falls back to `"New Chat"` when the session only holds the greeting.
pub fn session_title(first_message: Option<&str>) -> String {
    match first_message {
        Some(text) if !text.trim().is_empty() => {
            let trimmed = text.trim();
            let cut: String = trimmed.chars().take(TITLE_MAX_CHARS).collect();
            if trimmed.chars().count() > TITLE_MAX_CHARS {
                format!("{cut}...")
            } else {
                cut
            }
        }
        _ => "New Chat".to_owned(),
    }
}

/// `HH:MM` clock label for a millisecond timestamp, in local time.
///
/// Outside the browser there is no timezone to resolve, so this renders
/// nothing rather than a misleading UTC value.
pub fn clock_label(timestamp_ms: f64) -> String {
    #[cfg(feature = "hydrate")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(timestamp_ms));
        format!("{:02}:{:02}", date.get_hours(), date.get_minutes())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = timestamp_ms;
        String::new()
    }
}

/// Short `YYYY-MM-DD` label for a millisecond timestamp, in local time.
pub fn date_label(timestamp_ms: f64) -> String {
    #[cfg(feature = "hydrate")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(timestamp_ms));
        format!(
            "{:04}-{:02}-{:02}",
            date.get_full_year(),
            date.get_month() + 1,
            date.get_date()
        )
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = timestamp_ms;
        String::new()
    }
}

/// Current wall-clock time in milliseconds since the Unix epoch.
///
/// Zero outside the browser; timestamps are display-only data here.
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}
