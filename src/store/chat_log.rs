//! Per-course archive of private chat sessions.
//!
//! Sessions are archived when the user starts a new chat or leaves the chat
//! view, and restored from the history drawer. The archive is local-only;
//! the shared forum feed comes from the API instead.

#[cfg(test)]
#[path = "chat_log_test.rs"]
mod chat_log_test;

use serde::{Deserialize, Serialize};

use crate::state::chat::ChatMessage;
use crate::util::format;

/// Storage key for the chat-log document.
pub const TABLE_KEY: &str = "chat_log";

/// One archived chat session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatSessionRecord {
    pub id: String,
    pub course_id: String,
    pub title: String,
    pub saved_ms: f64,
    pub messages: Vec<ChatMessage>,
}

/// Build an archive record from a live session, or `None` when the session
/// only holds the assistant greeting and is not worth keeping.
pub fn build_session_record(
    id: String,
    course_id: &str,
    messages: &[ChatMessage],
    saved_ms: f64,
) -> Option<ChatSessionRecord> {
    if messages.len() <= 1 {
        return None;
    }
    let title = format::session_title(messages.get(1).map(|m| m.content.as_str()));
    Some(ChatSessionRecord {
        id,
        course_id: course_id.to_owned(),
        title,
        saved_ms,
        messages: messages.to_vec(),
    })
}

/// Insert `record` into `log`, keeping the archive newest-first.
pub fn insert_session(log: &mut Vec<ChatSessionRecord>, record: ChatSessionRecord) {
    let at = log
        .iter()
        .position(|existing| existing.saved_ms <= record.saved_ms)
        .unwrap_or(log.len());
    log.insert(at, record);
}

/// Archived sessions for `course_id`, newest first.
pub fn sessions_for_course(log: &[ChatSessionRecord], course_id: &str) -> Vec<ChatSessionRecord> {
    log.iter()
        .filter(|s| s.course_id == course_id)
        .cloned()
        .collect()
}

/// Load the full archive from the record store.
pub fn load() -> Vec<ChatSessionRecord> {
    super::load_table(TABLE_KEY).unwrap_or_default()
}

/// Archive a live session, returning the refreshed per-course list.
pub fn archive_session(course_id: &str, messages: &[ChatMessage]) -> Vec<ChatSessionRecord> {
    let mut log = load();
    if let Some(record) = build_session_record(
        uuid::Uuid::new_v4().to_string(),
        course_id,
        messages,
        format::now_ms(),
    ) {
        insert_session(&mut log, record);
        super::save_table(TABLE_KEY, &log);
    }
    sessions_for_course(&log, course_id)
}
