use super::*;

#[test]
fn login_requires_both_fields() {
    assert!(validate_login_input("", "pw").is_err());
    assert!(validate_login_input("a@b.edu", "").is_err());
    assert!(validate_login_input("a@b.edu", "pw").is_ok());
}

#[test]
fn login_rejects_malformed_email() {
    let err = validate_login_input("not-an-email", "pw").unwrap_err();
    assert!(err.contains("valid email"));
}

#[test]
fn register_requires_a_name() {
    let err = validate_register_input("a@b.edu", "longenough", " ").unwrap_err();
    assert!(err.contains("name"));
}

#[test]
fn register_enforces_password_length() {
    assert!(validate_register_input("a@b.edu", "short", "Jan").is_err());
    assert!(validate_register_input("a@b.edu", "longenough", "Jan").is_ok());
}

#[test]
fn teachers_land_on_the_dashboard() {
    assert_eq!(post_login_path("teacher"), "/dashboard");
    assert_eq!(post_login_path("admin"), "/dashboard");
    assert_eq!(post_login_path("student"), "/courses");
}
