//! Session state, data models, and the interaction log

pub mod log;
pub mod models;
pub mod state;

pub use log::InteractionLog;
pub use models::{ChatMessage, InteractionRow, Language, MessageRole, UiStrings};
pub use state::{SessionId, SessionManager, SessionState};
