use super::*;

#[test]
fn size_label_formats_two_decimals() {
    assert_eq!(size_label(1024.0 * 1024.0), "1.00 MB");
    assert_eq!(size_label(2_300_000.0), "2.19 MB");
    assert_eq!(size_label(0.0), "0.00 MB");
}

#[test]
fn session_title_truncates_long_messages() {
    let long = "a".repeat(60);
    let title = session_title(Some(&long));
    assert_eq!(title.chars().count(), TITLE_MAX_CHARS + 3);
    assert!(title.ends_with("..."));
}

#[test]
fn session_title_keeps_short_messages_verbatim() {
    assert_eq!(
        session_title(Some("What is a derivative?")),
        "What is a derivative?"
    );
}

#[test]
fn session_title_trims_whitespace() {
    assert_eq!(session_title(Some("  hello  ")), "hello");
}

#[test]
fn session_title_falls_back_for_empty_sessions() {
    assert_eq!(session_title(None), "New Chat");
    assert_eq!(session_title(Some("   ")), "New Chat");
}

#[test]
fn session_title_counts_chars_not_bytes() {
    let cyrillic = "п".repeat(50);
    let title = session_title(Some(&cyrillic));
    assert_eq!(title.chars().count(), TITLE_MAX_CHARS + 3);
}

#[test]
fn clock_and_date_labels_are_empty_outside_the_browser() {
    assert_eq!(clock_label(1_700_000_000_000.0), "");
    assert_eq!(date_label(1_700_000_000_000.0), "");
}
