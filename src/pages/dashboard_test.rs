use super::*;

#[test]
fn missing_course_id_falls_back_to_placeholder() {
    let (id, name) = resolve_active_course(None);
    assert_eq!(id, "default");
    assert_eq!(name, "Your Course");
}

#[test]
fn uncached_course_keeps_its_id() {
    // The course cache is inert outside the browser, so the id passes
    // through with the placeholder name.
    let (id, name) = resolve_active_course(Some("calc-101"));
    assert_eq!(id, "calc-101");
    assert_eq!(name, "Your Course");
}

#[test]
fn ingest_polling_interval_is_sub_second() {
    assert_eq!(INGEST_POLL_MS, 800);
}
