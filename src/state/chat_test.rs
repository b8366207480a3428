use super::*;

#[test]
fn greeting_names_the_course() {
    let text = ChatState::greeting("Advanced Calculus");
    assert!(text.contains("Advanced Calculus"));
}

#[test]
fn start_session_resets_to_a_single_greeting() {
    let mut state = ChatState::default();
    state.push(Role::User, "old question".to_owned(), 1.0);
    state.typing = true;
    state.ticket = Some(QueueTicket {
        ticket_id: "tk".to_owned(),
        position: 2,
        wait_secs: 4.0,
    });

    state.start_session("Network Security", 5.0);

    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0].role, Role::Assistant);
    assert!(state.messages[0].content.contains("Network Security"));
    assert!(!state.typing);
    assert!(state.ticket.is_none());
}

#[test]
fn start_session_keeps_forum_and_history() {
    let mut state = ChatState {
        forum: vec![crate::net::types::ForumEntry {
            user_name: "Aru".to_owned(),
            question: "q".to_owned(),
            answer: "a".to_owned(),
        }],
        ..ChatState::default()
    };
    state.start_session("Calculus", 0.0);
    assert_eq!(state.forum.len(), 1);
}

#[test]
fn push_appends_in_order_with_unique_ids() {
    let mut state = ChatState::default();
    state.push(Role::User, "one".to_owned(), 1.0);
    state.push(Role::Assistant, "two".to_owned(), 2.0);
    assert_eq!(state.messages.len(), 2);
    assert_ne!(state.messages[0].id, state.messages[1].id);
    assert_eq!(state.messages[1].content, "two");
}

#[test]
fn queue_ticket_label_rounds_wait_up() {
    let ticket = QueueTicket {
        ticket_id: "tk".to_owned(),
        position: 3,
        wait_secs: 11.2,
    };
    assert_eq!(ticket.label(), "Queue #3 (12s)");

    let exact = QueueTicket {
        ticket_id: "tk".to_owned(),
        position: 1,
        wait_secs: 4.0,
    };
    assert_eq!(exact.label(), "Queue #1 (4s)");
}

#[test]
fn chat_message_round_trips_through_serde_for_the_archive() {
    let msg = ChatMessage {
        id: "m1".to_owned(),
        role: Role::User,
        content: "hi".to_owned(),
        timestamp_ms: 42.0,
    };
    let value = serde_json::to_value(&msg).expect("message should encode");
    assert_eq!(value["role"], serde_json::json!("user"));
    let back: ChatMessage = serde_json::from_value(value).expect("message should decode");
    assert_eq!(back, msg);
}
