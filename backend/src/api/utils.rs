//! API utility functions
//!
//! Contains the shared router state alias, query validation, and the session
//! lookup helper used by the HTTP handlers.

use crate::error::AppError;
use crate::patterns::PatternEntry;
use crate::session::{SessionManager, SessionState};
use crate::voice::VoiceAdapter;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Maximum query length in characters
pub const MAX_QUERY_LENGTH: usize = 10_000; // 10KB max query length

/// Shared state threaded through the router
pub type RouterState = (
    Arc<SessionManager>,
    Arc<Vec<PatternEntry>>,
    Arc<VoiceAdapter>,
);

/// Validate query string
///
/// # Arguments
/// * `query` - Query string to validate
///
/// # Returns
/// * `Ok(())` - Query is valid
/// * `Err(AppError)` - Query is invalid (empty or too long)
pub fn validate_query(query: &str) -> Result<(), AppError> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Err(AppError::InvalidRequest("Query cannot be empty".to_string()));
    }
    if trimmed.len() > MAX_QUERY_LENGTH {
        return Err(AppError::InvalidRequest(format!(
            "Query exceeds maximum length of {} characters",
            MAX_QUERY_LENGTH
        )));
    }
    Ok(())
}

/// Look up a session by id, failing with `SessionNotFound` if absent
pub async fn require_session(
    sessions: &SessionManager,
    id: &str,
) -> Result<Arc<RwLock<SessionState>>, AppError> {
    sessions
        .get(id)
        .await
        .ok_or_else(|| AppError::SessionNotFound(id.to_string()))
}
