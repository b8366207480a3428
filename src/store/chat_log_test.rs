use super::*;
use crate::state::chat::{ChatMessage, Role};

fn msg(role: Role, content: &str) -> ChatMessage {
    ChatMessage {
        id: uuid::Uuid::new_v4().to_string(),
        role,
        content: content.to_owned(),
        timestamp_ms: 0.0,
    }
}

fn record(course_id: &str, saved_ms: f64) -> ChatSessionRecord {
    ChatSessionRecord {
        id: uuid::Uuid::new_v4().to_string(),
        course_id: course_id.to_owned(),
        title: "t".to_owned(),
        saved_ms,
        messages: vec![msg(Role::Assistant, "hi"), msg(Role::User, "q")],
    }
}

#[test]
fn build_session_record_skips_greeting_only_sessions() {
    let greeting = [msg(Role::Assistant, "Hello! I am your assistant.")];
    assert!(build_session_record("s1".to_owned(), "c1", &greeting, 1.0).is_none());
    assert!(build_session_record("s1".to_owned(), "c1", &[], 1.0).is_none());
}

#[test]
fn build_session_record_titles_from_first_user_message() {
    let messages = [
        msg(Role::Assistant, "Hello! I am your assistant."),
        msg(Role::User, "Explain gradient descent"),
        msg(Role::Assistant, "Gradient descent is..."),
    ];
    let record =
        build_session_record("s1".to_owned(), "c1", &messages, 7.0).expect("session should archive");
    assert_eq!(record.title, "Explain gradient descent");
    assert_eq!(record.course_id, "c1");
    assert_eq!(record.messages.len(), 3);
    assert!((record.saved_ms - 7.0).abs() < f64::EPSILON);
}

#[test]
fn insert_session_keeps_newest_first() {
    let mut log = Vec::new();
    insert_session(&mut log, record("c1", 10.0));
    insert_session(&mut log, record("c1", 30.0));
    insert_session(&mut log, record("c1", 20.0));
    let stamps: Vec<f64> = log.iter().map(|s| s.saved_ms).collect();
    assert_eq!(stamps, vec![30.0, 20.0, 10.0]);
}

#[test]
fn sessions_for_course_filters_other_courses() {
    let mut log = Vec::new();
    insert_session(&mut log, record("c1", 10.0));
    insert_session(&mut log, record("c2", 20.0));
    insert_session(&mut log, record("c1", 30.0));
    let sessions = sessions_for_course(&log, "c1");
    assert_eq!(sessions.len(), 2);
    assert!(sessions.iter().all(|s| s.course_id == "c1"));
    assert!(sessions[0].saved_ms > sessions[1].saved_ms);
}
