//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `chat`, `courses`, `materials`, `ui`)
//! so individual components can depend on small focused models provided via
//! Leptos context.

pub mod auth;
pub mod chat;
pub mod courses;
pub mod materials;
pub mod ui;
