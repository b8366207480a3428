//! Cross-cutting helpers for session storage and display formatting.

pub mod format;
pub mod session;
