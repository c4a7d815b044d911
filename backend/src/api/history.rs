//! Interaction history endpoints
//!
//! Serves the interaction log as JSON and as a CSV download.

use crate::api::utils::{require_session, RouterState};
use crate::error::AppError;
use crate::session::InteractionRow;
use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Json},
};
use serde::Serialize;

/// Interaction history for one session
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    /// The session the rows belong to
    pub session_id: String,
    /// Logged rows in insertion order
    pub rows: Vec<InteractionRow>,
}

/// GET /api/sessions/:id/history - Interaction-log rows as JSON
pub async fn get_history(
    State((sessions, _, _)): State<RouterState>,
    Path(id): Path<String>,
) -> Result<Json<HistoryResponse>, AppError> {
    let session = require_session(&sessions, &id).await?;
    let rows = session.read().await.interaction_log.rows().to_vec();

    Ok(Json(HistoryResponse {
        session_id: id,
        rows,
    }))
}

/// GET /api/sessions/:id/history/export - Chat log as a CSV download
pub async fn export_history(
    State((sessions, _, _)): State<RouterState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let session = require_session(&sessions, &id).await?;
    let csv = session.read().await.interaction_log.to_csv();

    let headers = [
        (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
        (
            header::CONTENT_DISPOSITION,
            "attachment; filename=\"interaction_history.csv\"",
        ),
    ];

    Ok((headers, csv))
}
