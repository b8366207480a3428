//! State for the course chat view: session messages, queue ticket, forum.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use serde::{Deserialize, Serialize};

use crate::net::types::ForumEntry;
use crate::store::chat_log::ChatSessionRecord;

/// Who authored a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single message in the private session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    pub content: String,
    pub timestamp_ms: f64,
}

/// Queue admission feedback held while a chat request is parked server-side.
#[derive(Clone, Debug, PartialEq)]
pub struct QueueTicket {
    pub ticket_id: String,
    pub position: u32,
    pub wait_secs: f64,
}

impl QueueTicket {
    /// Status-pill label, e.g. `"Queue #3 (12s)"`. Wait is rounded up.
    pub fn label(&self) -> String {
        format!("Queue #{} ({}s)", self.position, self.wait_secs.ceil() as i64)
    }
}

/// State for the chat view.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    /// Course the session is bound to; `None` until the route resolves.
    pub course_id: Option<String>,
    pub course_name: Option<String>,
    pub messages: Vec<ChatMessage>,
    /// Assistant typing indicator; also covers time spent queued.
    pub typing: bool,
    /// Held queue ticket while the server keeps the request parked.
    pub ticket: Option<QueueTicket>,
    /// Request spoken-audio answers instead of plain text.
    pub voice_mode: bool,
    /// Shared community question/answer feed for the course.
    pub forum: Vec<ForumEntry>,
    /// Archived sessions for the history drawer, newest first.
    pub history: Vec<ChatSessionRecord>,
    pub show_history: bool,
}

impl ChatState {
    /// Assistant greeting shown when a session opens or resets.
    pub fn greeting(course_name: &str) -> String {
        format!(
            "Hello! I am your AI Assistant for {course_name}. \
             I have indexed the specific materials for this course. How can I help you?"
        )
    }

    /// Begin a fresh session for `course_name`, keeping forum and history.
    pub fn start_session(&mut self, course_name: &str, now_ms: f64) {
        self.messages = vec![ChatMessage {
            id: uuid::Uuid::new_v4().to_string(),
            role: Role::Assistant,
            content: Self::greeting(course_name),
            timestamp_ms: now_ms,
        }];
        self.typing = false;
        self.ticket = None;
    }

    /// Append a message to the session.
    pub fn push(&mut self, role: Role, content: String, now_ms: f64) {
        self.messages.push(ChatMessage {
            id: uuid::Uuid::new_v4().to_string(),
            role,
            content,
            timestamp_ms: now_ms,
        });
    }
}
