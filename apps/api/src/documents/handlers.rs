//! Axum route handlers for the Documents API.

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    Json,
};
use serde::Deserialize;

use crate::auth::bearer_token;
use crate::documents::{current_document, save_document};
use crate::errors::AppError;
use crate::models::document::{DocumentKind, DocumentRow};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SaveDocumentRequest {
    pub content: String,
}

/// GET /api/v1/documents/:kind
///
/// Returns the caller's current document of the given kind.
pub async fn handle_get_document(
    State(state): State<AppState>,
    Path(kind): Path<DocumentKind>,
    headers: HeaderMap,
) -> Result<Json<DocumentRow>, AppError> {
    let user = state.auth.verify(bearer_token(&headers)?).await?;

    let row = current_document(&state.db, user.id, kind)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No current {} found", kind.label())))?;

    Ok(Json(row))
}

/// PUT /api/v1/documents/:kind
///
/// Saves a new version of the caller's document and makes it current.
pub async fn handle_save_document(
    State(state): State<AppState>,
    Path(kind): Path<DocumentKind>,
    headers: HeaderMap,
    Json(request): Json<SaveDocumentRequest>,
) -> Result<Json<DocumentRow>, AppError> {
    let user = state.auth.verify(bearer_token(&headers)?).await?;

    if request.content.trim().is_empty() {
        return Err(AppError::Validation("content cannot be empty".to_string()));
    }

    let row = save_document(&state.db, user.id, kind, &request.content).await?;
    Ok(Json(row))
}
