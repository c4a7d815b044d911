//! Session API endpoints
//!
//! Handles session creation, login, language preference, and snapshots.

use crate::api::utils::{require_session, RouterState};
use crate::error::AppError;
use crate::session::{Language, SessionManager, SessionState};
use axum::{
    extract::{Path, State},
    response::Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Request to create a new session
#[derive(Debug, Deserialize, Default)]
pub struct CreateSessionRequest {
    /// Optional login name; when present and non-empty the session starts
    /// logged in
    #[serde(default)]
    pub username: Option<String>,
}

/// Request to log in with a display name
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Free-text name (this is not authentication)
    pub username: String,
}

/// Request to change the preferred language
#[derive(Debug, Deserialize)]
pub struct SetLanguageRequest {
    /// New preferred language
    pub language: Language,
}

/// Session snapshot returned by the session endpoints
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    /// Session unique identifier
    pub id: String,
    /// Display name supplied at login, if any
    pub username: Option<String>,
    /// Whether a non-empty name has been supplied
    pub user_logged_in: bool,
    /// Preferred response locale
    pub language_preference: Language,
    /// Number of displayed chat entries
    pub message_count: usize,
    /// Number of logged interactions
    pub interaction_count: usize,
    /// Localized prompt: the login prompt before login, a greeting after
    pub greeting: String,
}

fn snapshot(id: &str, session: &SessionState) -> SessionResponse {
    let strings = session.language_preference.strings();
    let greeting = match (&session.username, session.user_logged_in) {
        (Some(name), true) => format!("{} {}! {}", strings.welcome, name, strings.ask_query),
        _ => strings.login_prompt.to_string(),
    };

    SessionResponse {
        id: id.to_string(),
        username: session.username.clone(),
        user_logged_in: session.user_logged_in,
        language_preference: session.language_preference,
        message_count: session.messages.len(),
        interaction_count: session.interaction_log.len(),
        greeting,
    }
}

/// POST /api/sessions - Create a new session, optionally logging in
pub async fn create_session(
    State((sessions, _, _)): State<RouterState>,
    Json(request): Json<CreateSessionRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    let id = SessionManager::generate_id();
    let session = sessions.get_or_create(&id).await;

    let mut session = session.write().await;
    if let Some(name) = &request.username {
        session.login(name).map_err(AppError::InvalidRequest)?;
    }

    info!(session_id = %id, logged_in = session.user_logged_in, "Session created");

    Ok(Json(snapshot(&id, &session)))
}

/// GET /api/sessions/:id - Get a session snapshot
pub async fn get_session(
    State((sessions, _, _)): State<RouterState>,
    Path(id): Path<String>,
) -> Result<Json<SessionResponse>, AppError> {
    let session = require_session(&sessions, &id).await?;
    let session = session.read().await;
    Ok(Json(snapshot(&id, &session)))
}

/// POST /api/sessions/:id/login - Supply the free-text login name
pub async fn login(
    State((sessions, _, _)): State<RouterState>,
    Path(id): Path<String>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    let session = require_session(&sessions, &id).await?;

    let mut session = session.write().await;
    session
        .login(&request.username)
        .map_err(AppError::InvalidRequest)?;

    info!(session_id = %id, "User logged in");

    Ok(Json(snapshot(&id, &session)))
}

/// PUT /api/sessions/:id/language - Set the preferred language
pub async fn set_language(
    State((sessions, _, _)): State<RouterState>,
    Path(id): Path<String>,
    Json(request): Json<SetLanguageRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    let session = require_session(&sessions, &id).await?;

    let mut session = session.write().await;
    session.set_language(request.language);

    Ok(Json(snapshot(&id, &session)))
}
