use super::*;

#[test]
fn course_decodes_camel_case_fields() {
    let c: Course = serde_json::from_value(serde_json::json!({
        "id": "c1",
        "subject": "Machine Learning",
        "teacherName": "Prof. Alimov",
        "teacherId": "t2",
        "description": "Fundamental algorithms.",
        "materialsCount": 24,
        "studentCount": 320
    }))
    .expect("course should decode");
    assert_eq!(c.subject, "Machine Learning");
    assert_eq!(c.teacher_name, "Prof. Alimov");
    assert_eq!(c.student_count, 320);
}

#[test]
fn course_tolerates_missing_optional_fields() {
    let c: Course = serde_json::from_value(serde_json::json!({
        "id": "c1",
        "subject": "Calculus",
        "teacherName": "Dr. Serik"
    }))
    .expect("sparse course should decode");
    assert_eq!(c.materials_count, 0);
    assert!(c.description.is_empty());
}

#[test]
fn material_record_maps_type_to_kind_and_defaults_status() {
    let m: MaterialRecord = serde_json::from_value(serde_json::json!({
        "id": "m1",
        "name": "lecture1.pdf",
        "type": "application/pdf",
        "size": "2.10 MB"
    }))
    .expect("material should decode");
    assert_eq!(m.kind, "application/pdf");
    assert_eq!(m.status, MaterialStatus::Pending);
    assert_eq!(m.progress, 0);
}

#[test]
fn material_status_decodes_lowercase() {
    let m: MaterialRecord = serde_json::from_value(serde_json::json!({
        "id": "m1",
        "name": "a.pdf",
        "status": "ready",
        "progress": 100
    }))
    .expect("material should decode");
    assert_eq!(m.status, MaterialStatus::Ready);
    assert_eq!(m.kind, "document");
}

#[test]
fn ingest_status_ready_on_status_or_progress() {
    let by_status = IngestStatus {
        status: "ready".to_owned(),
        progress: 40,
        current_file: None,
    };
    let by_progress = IngestStatus {
        status: "indexing".to_owned(),
        progress: 100,
        current_file: Some("notes.docx".to_owned()),
    };
    let neither = IngestStatus {
        status: "indexing".to_owned(),
        progress: 55,
        current_file: None,
    };
    assert!(by_status.is_ready());
    assert!(by_progress.is_ready());
    assert!(!neither.is_ready());
}

#[test]
fn chat_reply_decodes_answer_variant() {
    let reply: ChatReply =
        serde_json::from_value(serde_json::json!({ "response": "The answer is 42." }))
            .expect("answer should decode");
    assert_eq!(
        reply,
        ChatReply::Answer {
            response: "The answer is 42.".to_owned()
        }
    );
    assert!(reply.as_queued().is_none());
}

#[test]
fn chat_reply_decodes_queued_variant() {
    let reply: ChatReply = serde_json::from_value(serde_json::json!({
        "status": "queued",
        "ticket_id": "tk-9",
        "position": 3,
        "wait_time": 11.2
    }))
    .expect("queued should decode");
    let (ticket, pos, wait) = reply.as_queued().expect("should expose ticket");
    assert_eq!(ticket, "tk-9");
    assert_eq!(pos, 3);
    assert!((wait - 11.2).abs() < f64::EPSILON);
}

#[test]
fn chat_reply_non_queued_status_is_not_a_ticket() {
    let reply = ChatReply::Queued {
        status: "rejected".to_owned(),
        ticket_id: "tk-1".to_owned(),
        position: 0,
        wait_time: 0.0,
    };
    assert!(reply.as_queued().is_none());
}

#[test]
fn login_response_decodes_token_and_role() {
    let r: LoginResponse = serde_json::from_value(serde_json::json!({
        "token": "jwt-abc",
        "user": { "id": "u1", "name": "Aida", "role": "teacher" }
    }))
    .expect("login response should decode");
    assert_eq!(r.token, "jwt-abc");
    assert_eq!(r.user.role, "teacher");
}
