use super::*;

fn request() -> ChatRequest {
    ChatRequest {
        message: "What is covered in week 3?".to_owned(),
        course_id: "calc-101".to_owned(),
        is_voice: false,
    }
}

fn queued(ticket_id: &str, position: u32, wait_time: f64) -> ChatReply {
    ChatReply::Queued {
        status: "queued".to_owned(),
        ticket_id: ticket_id.to_owned(),
        position,
        wait_time,
    }
}

#[test]
fn fresh_submission_carries_null_ticket() {
    let payload = request_payload(&request(), None);
    assert_eq!(payload["message"], "What is covered in week 3?");
    assert_eq!(payload["course_id"], "calc-101");
    assert_eq!(payload["is_voice"], false);
    assert!(payload["ticket_id"].is_null());
}

#[test]
fn poll_echoes_held_ticket_verbatim() {
    let payload = request_payload(&request(), Some("tkt-42"));
    assert_eq!(payload["ticket_id"], "tkt-42");
    // The rest of the request is identical to the fresh submission.
    assert_eq!(payload["message"], "What is covered in week 3?");
}

#[test]
fn answer_reply_delivers() {
    let reply = ChatReply::Answer {
        response: "Week 3 covers limits.".to_owned(),
    };
    assert_eq!(
        classify_reply(&reply, 0),
        PollStep::Deliver("Week 3 covers limits.".to_owned())
    );
}

#[test]
fn queued_reply_holds_the_ticket() {
    let step = classify_reply(&queued("tkt-1", 3, 11.2), 0);
    match step {
        PollStep::Hold(ticket) => {
            assert_eq!(ticket.ticket_id, "tkt-1");
            assert_eq!(ticket.position, 3);
            assert_eq!(ticket.label(), "Queue #3 (12s)");
        }
        other => panic!("expected Hold, got {other:?}"),
    }
}

#[test]
fn queued_reply_at_poll_cap_aborts() {
    let step = classify_reply(&queued("tkt-1", 1, 2.0), MAX_POLL_ATTEMPTS - 1);
    assert_eq!(step, PollStep::Abort(QUEUE_TIMEOUT_MESSAGE));
}

#[test]
fn last_allowed_attempt_before_cap_still_holds() {
    let step = classify_reply(&queued("tkt-1", 1, 2.0), MAX_POLL_ATTEMPTS - 2);
    assert!(matches!(step, PollStep::Hold(_)));
}

#[test]
fn unexpected_status_string_aborts() {
    let reply = ChatReply::Queued {
        status: "draining".to_owned(),
        ticket_id: "tkt-1".to_owned(),
        position: 1,
        wait_time: 2.0,
    };
    assert_eq!(classify_reply(&reply, 0), PollStep::Abort(SERVICE_ERROR_MESSAGE));
}
