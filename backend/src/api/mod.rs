//! API module
//!
//! Contains HTTP request handlers for the widget's session, chat, history,
//! and voice endpoints

pub mod chat;
pub mod history;
pub mod sessions;
pub mod utils;
pub mod voice;
