use super::*;

#[test]
fn guests_get_the_sign_in_placeholder() {
    assert_eq!(input_placeholder(true), GUEST_PLACEHOLDER);
    assert_eq!(input_placeholder(false), INPUT_PLACEHOLDER);
}

#[test]
fn blank_input_cannot_submit() {
    assert!(!can_submit("", false, false));
    assert!(!can_submit("   ", false, false));
}

#[test]
fn guests_cannot_submit() {
    assert!(!can_submit("hello", false, true));
}

#[test]
fn submission_waits_for_the_current_exchange() {
    assert!(!can_submit("hello", true, false));
    assert!(can_submit("hello", false, false));
}
