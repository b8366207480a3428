//! Wire DTOs for the REST boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads field-for-field so serde
//! handles the boundary and page/component code stays schema-driven. Course
//! and material payloads use camelCase on the wire; chat/queue and forum
//! payloads use snake_case.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A course card as served by `GET /api/courses`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Course identifier, also the chat workspace id.
    pub id: String,
    /// Subject title shown on the card and in the chat header.
    pub subject: String,
    /// Display name of the owning teacher.
    pub teacher_name: String,
    #[serde(default)]
    pub teacher_id: String,
    #[serde(default)]
    pub description: String,
    /// Number of indexed materials.
    #[serde(default)]
    pub materials_count: u32,
    /// Number of enrolled students.
    #[serde(default)]
    pub student_count: u32,
}

/// Ingestion lifecycle of an uploaded material.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialStatus {
    #[default]
    Pending,
    Processing,
    Ready,
    Error,
}

/// An uploaded course material as served by `GET /api/materials/{course_id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialRecord {
    pub id: String,
    /// Original file name; also the delete key on the API.
    pub name: String,
    /// MIME type or `"document"` when the browser reports none.
    #[serde(rename = "type", default = "default_material_kind")]
    pub kind: String,
    /// Human-readable size label (e.g. `"1.24 MB"`).
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub status: MaterialStatus,
    /// Indexing progress, 0..=100.
    #[serde(default)]
    pub progress: u8,
}

fn default_material_kind() -> String {
    "document".to_owned()
}

/// Workspace-wide ingestion status from `GET /api/ingest/status/{course_id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IngestStatus {
    /// Server-side phase (e.g. `"indexing"`, `"ready"`).
    pub status: String,
    /// Workspace indexing progress, 0..=100.
    #[serde(default)]
    pub progress: u8,
    /// File currently being indexed, if the server reports one.
    #[serde(default)]
    pub current_file: Option<String>,
}

impl IngestStatus {
    /// Whether the workspace is fully indexed.
    pub fn is_ready(&self) -> bool {
        self.status == "ready" || self.progress >= 100
    }
}

/// A shared question/answer pair from the public forum feed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ForumEntry {
    pub user_name: String,
    pub question: String,
    pub answer: String,
}

/// Successful response to `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Bearer token for subsequent authenticated calls.
    pub token: String,
    pub user: SessionUser,
}

/// The authenticated user embedded in a login response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// `"student"` or `"teacher"` (`"admin"` is treated as teacher).
    pub role: String,
}

/// Error body the backend attaches to non-OK responses.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ApiErrorBody {
    pub detail: Option<String>,
}

/// Reply to `POST /api/chat`: either a completed answer or a queue ticket.
///
/// The queue variant carries the admission-control feedback the client polls
/// with; `wait_time` is the server's wait estimate in seconds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChatReply {
    Queued {
        status: String,
        ticket_id: String,
        position: u32,
        wait_time: f64,
    },
    Answer {
        response: String,
    },
}

impl ChatReply {
    /// Queue ticket fields when this reply is a queue admission record.
    ///
    /// The untagged decode accepts any `status` string; only `"queued"`
    /// counts as a real ticket.
    pub fn as_queued(&self) -> Option<(&str, u32, f64)> {
        match self {
            Self::Queued {
                status,
                ticket_id,
                position,
                wait_time,
            } if status == "queued" => Some((ticket_id, *position, *wait_time)),
            _ => None,
        }
    }
}
