//! Session state and registry
//!
//! One mutable `SessionState` per user interaction lifetime, held in an
//! in-memory registry keyed by session id. Sessions are created on first
//! access with defaults and dropped implicitly with the process.

use crate::patterns::{match_query, normalize, MatchOutcome, PatternEntry};
use crate::session::log::InteractionLog;
use crate::session::models::{ChatMessage, Language, MessageRole};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Unique identifier for a session
pub type SessionId = String;

/// Mutable record scoped to one user's interaction lifetime
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    /// Display name supplied at login
    pub username: Option<String>,
    /// Set once a non-empty name is supplied; never reset
    pub user_logged_in: bool,
    /// Preferred response locale
    pub language_preference: Language,
    /// Displayed chat entries (not consulted by matching)
    pub messages: Vec<ChatMessage>,
    /// "User: ..." / "Assistant: ..." lines; append-only, never pruned
    pub conversation_context: Vec<String>,
    /// Append-only (query, response) rows, exportable as CSV
    pub interaction_log: InteractionLog,
}

impl SessionState {
    /// Create a session with defaults (logged out, English, empty logs)
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the user's name and mark the session logged in
    ///
    /// An empty or whitespace-only name is rejected. A later login with a
    /// different name updates the display name; the logged-in flag is never
    /// reset.
    pub fn login(&mut self, name: &str) -> Result<(), String> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err("Name cannot be empty".to_string());
        }
        self.username = Some(trimmed.to_string());
        self.user_logged_in = true;
        Ok(())
    }

    /// Update the preferred response locale
    pub fn set_language(&mut self, language: Language) {
        self.language_preference = language;
    }

    /// The fallback response in the session's language
    pub fn fallback_response(&self) -> &'static str {
        self.language_preference.strings().no_response
    }

    /// Answer a query against the given pattern sequence
    ///
    /// Runs the pure matcher, then applies the bookkeeping the widget relies
    /// on: queries long enough to reach pattern scanning append a
    /// "User: ..." context line (plus an "Assistant: ..." line when a
    /// pattern hits), the exchange is appended to the displayed messages,
    /// and a row is added to the interaction log. Returns the response text.
    pub fn ask(&mut self, query: &str, patterns: &[PatternEntry]) -> String {
        let response = match match_query(query, patterns) {
            MatchOutcome::TooShort => self.fallback_response().to_string(),
            MatchOutcome::NoMatch => {
                self.push_context(MessageRole::User, &normalize(query));
                self.fallback_response().to_string()
            }
            MatchOutcome::Matched(response) => {
                let response = response.to_string();
                self.push_context(MessageRole::User, &normalize(query));
                self.push_context(MessageRole::Assistant, &response);
                response
            }
        };

        self.messages
            .push(ChatMessage::new(MessageRole::User, query.to_string()));
        self.messages
            .push(ChatMessage::new(MessageRole::Assistant, response.clone()));
        self.interaction_log.append(query, response.clone());

        response
    }

    fn push_context(&mut self, role: MessageRole, content: &str) {
        self.conversation_context
            .push(format!("{}: {}", role.context_tag(), content));
    }
}

/// Process-wide registry of live sessions
///
/// One `SessionState` per session id, created on demand. Sessions live until
/// the process exits; there is no explicit teardown.
#[derive(Debug, Default)]
pub struct SessionManager {
    sessions: RwLock<HashMap<SessionId, Arc<RwLock<SessionState>>>>,
}

impl SessionManager {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a new unique session id
    pub fn generate_id() -> SessionId {
        Uuid::new_v4().to_string()
    }

    /// Get the session for an id, creating it with defaults on first access
    pub async fn get_or_create(&self, id: &str) -> Arc<RwLock<SessionState>> {
        {
            let sessions = self.sessions.read().await;
            if let Some(session) = sessions.get(id) {
                return session.clone();
            }
        }

        let mut sessions = self.sessions.write().await;
        sessions
            .entry(id.to_string())
            .or_insert_with(|| Arc::new(RwLock::new(SessionState::new())))
            .clone()
    }

    /// Get the session for an id, if it exists
    pub async fn get(&self, id: &str) -> Option<Arc<RwLock<SessionState>>> {
        let sessions = self.sessions.read().await;
        sessions.get(id).cloned()
    }

    /// Number of live sessions
    #[allow(dead_code)] // Exercised from tests and external callers
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}
