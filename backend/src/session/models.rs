//! Session data models
//!
//! Defines the chat entries, interaction-log rows, and the per-language
//! UI-string table shared by the session state, the API layer, and the GUI.

use chrono::Utc;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Role of a message sender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// Message from the user
    User,
    /// Message from the assistant
    Assistant,
}

impl MessageRole {
    /// Convert the role to its string representation
    #[allow(dead_code)] // Used by the GUI through the library crate
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        }
    }

    /// Speaker tag used in the conversation-context lines
    pub fn context_tag(&self) -> &'static str {
        match self {
            MessageRole::User => "User",
            MessageRole::Assistant => "Assistant",
        }
    }
}

/// A single displayed chat entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role of the message sender
    pub role: MessageRole,
    /// Content of the message
    pub content: String,
    /// When the message was created (Unix timestamp)
    pub created_at: i64,
}

impl ChatMessage {
    /// Create a new message stamped with the current time
    pub fn new(role: MessageRole, content: String) -> Self {
        Self {
            role,
            content,
            created_at: Utc::now().timestamp(),
        }
    }
}

/// One row of the interaction log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionRow {
    /// The query as the user submitted it
    pub user_query: String,
    /// The response the assistant returned
    pub assistant_response: String,
}

/// Supported response locales
///
/// Only English is populated today; the table is keyed so more can be added
/// without touching the session logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    /// English (the only populated locale)
    #[default]
    English,
}

impl Language {
    /// All selectable languages
    #[allow(dead_code)] // Used by the GUI through the library crate
    pub const ALL: &'static [Language] = &[Language::English];

    /// Display name of the language
    #[allow(dead_code)] // Used by the GUI through the library crate
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "English",
        }
    }

    /// The UI strings for this language
    pub fn strings(&self) -> &'static UiStrings {
        &TRANSLATIONS[self]
    }
}

/// User-facing strings for one language
#[derive(Debug, Clone)]
#[allow(dead_code)] // Several labels are consumed only by the GUI through the library crate
pub struct UiStrings {
    /// Prompt above the chat input
    pub ask_query: &'static str,
    /// Indicator shown while a response is being produced
    pub thinking: &'static str,
    /// Fallback returned when no pattern matches or the query is too short
    pub no_response: &'static str,
    /// Prompt on the login name field
    pub login_prompt: &'static str,
    /// Label on the login button
    pub login_button: &'static str,
    /// Greeting prefix shown once logged in
    pub welcome: &'static str,
    /// Label on the CSV download button
    pub download_button: &'static str,
    /// Label on the history toggle
    pub view_history: &'static str,
    /// Label on the voice-input affordance
    pub voice_query: &'static str,
    /// Informational blurb describing the assistant
    pub info_section: &'static str,
}

static TRANSLATIONS: Lazy<HashMap<Language, UiStrings>> = Lazy::new(|| {
    let mut table = HashMap::new();
    table.insert(
        Language::English,
        UiStrings {
            ask_query: "Ask me anything about legal laws",
            thinking: "Thinking...",
            no_response: "Sorry, I couldn't find a matching response for your query.",
            login_prompt: "Enter your name to start chatting with the legal laws assistant",
            login_button: "Login",
            welcome: "Hello",
            download_button: "Download Chat History as CSV",
            view_history: "View History",
            voice_query: "Voice Query",
            info_section: "Legal Laws Advisor Bot: a conversational assistant that \
                           answers questions about legal laws. Ask your query of law \
                           and receive a canned response from the pattern library.",
        },
    );
    table
});
