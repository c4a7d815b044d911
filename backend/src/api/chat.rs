//! Chat API endpoint
//!
//! Accepts a free-text query, answers it from the pattern store, and records
//! the exchange in the session.

use crate::api::utils::{require_session, validate_query, RouterState};
use crate::error::AppError;
use axum::{
    extract::{Path, State},
    response::Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Request to submit a query
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// Free-text user query
    pub query: String,
}

/// Response to a submitted query
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    /// The canned (or fallback) response
    pub response: String,
    /// The session the exchange was recorded in
    pub session_id: String,
}

/// POST /api/sessions/:id/chat - Answer a query and record the exchange
///
/// Too-short queries and queries matching no pattern are not errors: they
/// receive the fallback response and are logged like any other exchange.
pub async fn chat(
    State((sessions, patterns, _)): State<RouterState>,
    Path(id): Path<String>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    validate_query(&request.query)?;

    let session = require_session(&sessions, &id).await?;
    let response = {
        let mut session = session.write().await;
        session.ask(&request.query, &patterns)
    };

    info!(
        session_id = %id,
        query_len = request.query.len(),
        response_len = response.len(),
        "Query answered"
    );

    Ok(Json(ChatResponse {
        response,
        session_id: id,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::PatternEntry;
    use crate::session::SessionManager;
    use crate::voice::{NullSpeechEngine, VoiceAdapter};
    use std::sync::Arc;

    const FALLBACK: &str = "Sorry, I couldn't find a matching response for your query.";

    fn create_test_router_state(patterns: Vec<PatternEntry>) -> RouterState {
        (
            Arc::new(SessionManager::new()),
            Arc::new(patterns),
            Arc::new(VoiceAdapter::new(Arc::new(NullSpeechEngine))),
        )
    }

    async fn create_session_id(state: &RouterState) -> String {
        let id = SessionManager::generate_id();
        state.0.get_or_create(&id).await;
        id
    }

    fn entry(pattern: &str, response: &str) -> PatternEntry {
        PatternEntry {
            pattern: pattern.to_string(),
            response: response.to_string(),
        }
    }

    #[tokio::test]
    async fn test_chat_with_matching_pattern() {
        let state = create_test_router_state(vec![entry("divorce", "See Family Law Act §12")]);
        let id = create_session_id(&state).await;

        let result = chat(
            State(state),
            Path(id.clone()),
            Json(ChatRequest {
                query: "What is the process for divorce?".to_string(),
            }),
        )
        .await
        .unwrap()
        .0;

        assert_eq!(result.response, "See Family Law Act §12");
        assert_eq!(result.session_id, id);
    }

    #[tokio::test]
    async fn test_chat_falls_back_without_match() {
        let state = create_test_router_state(vec![entry("divorce", "resp")]);
        let id = create_session_id(&state).await;

        let result = chat(
            State(state.clone()),
            Path(id.clone()),
            Json(ChatRequest {
                query: "how do contracts work".to_string(),
            }),
        )
        .await
        .unwrap()
        .0;
        assert_eq!(result.response, FALLBACK);

        // The fallback exchange is still logged
        let session = state.0.get(&id).await.unwrap();
        assert_eq!(session.read().await.interaction_log.len(), 1);
    }

    #[tokio::test]
    async fn test_chat_short_query_falls_back() {
        let state = create_test_router_state(vec![entry("ab", "matched")]);
        let id = create_session_id(&state).await;

        let result = chat(
            State(state),
            Path(id),
            Json(ChatRequest {
                query: "ab".to_string(),
            }),
        )
        .await
        .unwrap()
        .0;
        assert_eq!(result.response, FALLBACK);
    }

    #[tokio::test]
    async fn test_chat_empty_query_rejected() {
        let state = create_test_router_state(Vec::new());
        let id = create_session_id(&state).await;

        let result = chat(
            State(state),
            Path(id),
            Json(ChatRequest {
                query: "   ".to_string(),
            }),
        )
        .await;
        match result.unwrap_err() {
            AppError::InvalidRequest(_) => {}
            other => panic!("Expected InvalidRequest, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_chat_unknown_session() {
        let state = create_test_router_state(Vec::new());
        let result = chat(
            State(state),
            Path("nonexistent".to_string()),
            Json(ChatRequest {
                query: "what about bail".to_string(),
            }),
        )
        .await;
        match result.unwrap_err() {
            AppError::SessionNotFound(_) => {}
            other => panic!("Expected SessionNotFound, got: {:?}", other),
        }
    }
}
