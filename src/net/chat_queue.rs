//! Client side of the chat request queue protocol.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend runs ticket-based admission control: when all completion
//! slots are busy, `POST /api/chat` answers with a queue ticket instead of
//! a completion. The client holds the ticket, surfaces the reported
//! position and wait estimate, and resubmits the identical request with
//! the ticket id after a fixed poll delay until the server either answers
//! or the poll cap trips. The server owns all admission decisions; this
//! module only drives the polling loop and translates replies into UI
//! state transitions.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures and non-OK statuses abort the exchange with a single
//! generic in-chat message; there is no backoff policy beyond the fixed
//! poll delay.

#[cfg(test)]
#[path = "chat_queue_test.rs"]
mod chat_queue_test;

use crate::net::types::ChatReply;
use crate::state::chat::QueueTicket;

/// Fixed delay between queue polls.
pub const POLL_DELAY_MS: u64 = 2_000;

/// Maximum number of ticket polls before the exchange gives up.
pub const MAX_POLL_ATTEMPTS: u32 = 30;

/// Generic in-chat error bubble for any failed exchange.
pub const SERVICE_ERROR_MESSAGE: &str =
    "I'm having trouble connecting to the AI service. Please try again in a moment.";

/// In-chat message when a ticket never clears within the poll cap.
pub const QUEUE_TIMEOUT_MESSAGE: &str =
    "The assistant is still at capacity. Your question was not processed; please try again later.";

/// Outbound fields of one chat exchange. The same request is resubmitted
/// verbatim on every poll, with only the ticket id added.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatRequest {
    pub message: String,
    pub course_id: String,
    pub is_voice: bool,
}

/// JSON body for `POST /api/chat`. A fresh submission carries a null
/// ticket; polls echo the held ticket id verbatim.
pub fn request_payload(req: &ChatRequest, ticket_id: Option<&str>) -> serde_json::Value {
    serde_json::json!({
        "message": req.message,
        "course_id": req.course_id,
        "is_voice": req.is_voice,
        "ticket_id": ticket_id,
    })
}

/// Next action after a reply to submission number `attempt` (0-based).
#[derive(Clone, Debug, PartialEq)]
pub enum PollStep {
    /// The server answered; clear queue state and show the response.
    Deliver(String),
    /// Still parked: hold the ticket, show its status, poll again later.
    Hold(QueueTicket),
    /// Give up and surface the message as an in-chat error bubble.
    Abort(&'static str),
}

/// Translate a server reply into the next protocol step.
pub fn classify_reply(reply: &ChatReply, attempt: u32) -> PollStep {
    match reply.as_queued() {
        Some((ticket_id, position, wait_secs)) => {
            if attempt + 1 >= MAX_POLL_ATTEMPTS {
                PollStep::Abort(QUEUE_TIMEOUT_MESSAGE)
            } else {
                PollStep::Hold(QueueTicket {
                    ticket_id: ticket_id.to_owned(),
                    position,
                    wait_secs,
                })
            }
        }
        None => match reply {
            ChatReply::Answer { response } => PollStep::Deliver(response.clone()),
            // A non-"queued" status string is a protocol surprise; treat it
            // like any other failed exchange.
            ChatReply::Queued { .. } => PollStep::Abort(SERVICE_ERROR_MESSAGE),
        },
    }
}

/// Drive one full exchange: submit, poll while queued, return the answer.
///
/// `on_hold` receives every queue update (`Some` while parked, `None` once
/// the exchange leaves the queue) so the UI can render the status pill.
///
/// # Errors
///
/// Returns the in-chat error message for transport failures, protocol
/// surprises, and tickets that outlive the poll cap.
#[cfg(feature = "hydrate")]
pub async fn run_exchange(
    req: &ChatRequest,
    on_hold: impl Fn(Option<QueueTicket>),
) -> Result<String, String> {
    let mut ticket_id: Option<String> = None;

    for attempt in 0..MAX_POLL_ATTEMPTS {
        let payload = request_payload(req, ticket_id.as_deref());
        let reply = match super::api::send_chat(&payload).await {
            Ok(reply) => reply,
            Err(e) => {
                leptos::logging::warn!("chat exchange failed: {e}");
                on_hold(None);
                return Err(SERVICE_ERROR_MESSAGE.to_owned());
            }
        };

        match classify_reply(&reply, attempt) {
            PollStep::Deliver(answer) => {
                on_hold(None);
                return Ok(answer);
            }
            PollStep::Hold(ticket) => {
                ticket_id = Some(ticket.ticket_id.clone());
                on_hold(Some(ticket));
                gloo_timers::future::sleep(std::time::Duration::from_millis(POLL_DELAY_MS)).await;
            }
            PollStep::Abort(message) => {
                on_hold(None);
                return Err(message.to_owned());
            }
        }
    }

    on_hold(None);
    Err(QUEUE_TIMEOUT_MESSAGE.to_owned())
}
