//! Axum route handler for the history feed.

use axum::{extract::State, http::HeaderMap, Json};
use serde::Serialize;

use crate::auth::bearer_token;
use crate::errors::AppError;
use crate::history::{list_history, HistoryEntry};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub history: Vec<HistoryEntry>,
}

/// GET /api/v1/history
///
/// Returns the caller's merged generation history, newest first.
pub async fn handle_history(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<HistoryResponse>, AppError> {
    let user = state.auth.verify(bearer_token(&headers)?).await?;

    let history = list_history(&state.db, user.id).await?;
    Ok(Json(HistoryResponse { history }))
}
