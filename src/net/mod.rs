//! Backend communication: wire types, REST helpers, and the chat queue
//! polling protocol.

pub mod api;
pub mod chat_queue;
pub mod types;
