//! Voice API endpoints
//!
//! Voice-driven queries and speech-output control. Transcription failures
//! are reported to the caller and yield no input; they never crash the
//! session.

use crate::api::utils::{require_session, RouterState};
use crate::error::AppError;
use axum::{
    extract::{Path, State},
    response::Json,
};
use serde::Serialize;
use tracing::info;

/// Response to a voice query
#[derive(Debug, Serialize)]
pub struct VoiceQueryResponse {
    /// The transcribed user query
    pub query: String,
    /// The spoken acknowledgement
    pub response: String,
    /// The session the query belongs to
    pub session_id: String,
}

/// POST /api/sessions/:id/voice/query - Capture and answer one utterance
///
/// Captures one utterance, acknowledges it, and speaks the acknowledgement.
/// If speech output is still in progress from an earlier query, starting the
/// new synthesis stops it first.
pub async fn voice_query(
    State((sessions, _, voice)): State<RouterState>,
    Path(id): Path<String>,
) -> Result<Json<VoiceQueryResponse>, AppError> {
    require_session(&sessions, &id).await?;

    let query = voice.listen().await?;
    info!(session_id = %id, query_len = query.len(), "Voice input transcribed");

    let response = format!("Answering your query: {}", query);
    voice.speak(response.clone()).await;

    Ok(Json(VoiceQueryResponse {
        query,
        response,
        session_id: id,
    }))
}

/// POST /api/sessions/:id/voice/stop - Stop ongoing speech output
pub async fn voice_stop(
    State((sessions, _, voice)): State<RouterState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    require_session(&sessions, &id).await?;
    voice.stop().await;

    Ok(Json(serde_json::json!({
        "message": "Speech output stopped",
        "speech_in_progress": voice.speech_in_progress(),
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionManager;
    use crate::voice::{NullSpeechEngine, SpeechEngine, VoiceAdapter, VoiceError};
    use async_trait::async_trait;
    use std::sync::Arc;

    struct ScriptedEngine {
        transcript: Result<String, VoiceError>,
    }

    #[async_trait]
    impl SpeechEngine for ScriptedEngine {
        async fn synthesize(&self, _text: &str) -> Result<(), VoiceError> {
            Ok(())
        }

        fn transcribe(&self) -> Result<String, VoiceError> {
            self.transcript.clone()
        }
    }

    fn create_test_router_state(engine: Arc<dyn SpeechEngine>) -> RouterState {
        (
            Arc::new(SessionManager::new()),
            Arc::new(Vec::new()),
            Arc::new(VoiceAdapter::new(engine)),
        )
    }

    async fn create_session_id(state: &RouterState) -> String {
        let id = SessionManager::generate_id();
        state.0.get_or_create(&id).await;
        id
    }

    #[tokio::test]
    async fn test_voice_query_acknowledges_transcript() {
        let engine = Arc::new(ScriptedEngine {
            transcript: Ok("what about bail".to_string()),
        });
        let state = create_test_router_state(engine);
        let id = create_session_id(&state).await;

        let response = voice_query(State(state), Path(id)).await.unwrap().0;
        assert_eq!(response.query, "what about bail");
        assert_eq!(response.response, "Answering your query: what about bail");
    }

    #[tokio::test]
    async fn test_voice_query_unrecognized_audio() {
        let engine = Arc::new(ScriptedEngine {
            transcript: Err(VoiceError::Unrecognized),
        });
        let state = create_test_router_state(engine);
        let id = create_session_id(&state).await;

        let result = voice_query(State(state), Path(id)).await;
        match result.unwrap_err() {
            AppError::Voice(VoiceError::Unrecognized) => {}
            other => panic!("Expected Unrecognized voice error, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_voice_query_service_unavailable() {
        let state = create_test_router_state(Arc::new(NullSpeechEngine));
        let id = create_session_id(&state).await;

        let result = voice_query(State(state), Path(id)).await;
        match result.unwrap_err() {
            AppError::Voice(VoiceError::ServiceUnavailable(_)) => {}
            other => panic!("Expected ServiceUnavailable voice error, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_voice_stop_clears_flag() {
        let state = create_test_router_state(Arc::new(NullSpeechEngine));
        let id = create_session_id(&state).await;

        let response = voice_stop(State(state), Path(id)).await.unwrap().0;
        assert_eq!(response["speech_in_progress"], false);
    }

    #[tokio::test]
    async fn test_voice_endpoints_require_session() {
        let state = create_test_router_state(Arc::new(NullSpeechEngine));
        assert!(voice_query(State(state.clone()), Path("nope".to_string()))
            .await
            .is_err());
        assert!(voice_stop(State(state), Path("nope".to_string()))
            .await
            .is_err());
    }
}
