//! Reusable UI building blocks.

pub mod chat_view;
pub mod course_card;
pub mod forum_feed;
pub mod history_drawer;
pub mod layout;
pub mod material_row;
pub mod message_content;
pub mod system_panel;
pub mod upload_dropzone;
