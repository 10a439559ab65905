//! Axum route handler for PDF generation.

use axum::{extract::State, http::HeaderMap, Json};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::bearer_token;
use crate::errors::AppError;
use crate::models::generation::GenerationRecordRow;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePdfRequest {
    pub optimization_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct GeneratePdfResponse {
    /// Base64-encoded PDF bytes.
    pub pdf: String,
}

/// POST /api/v1/generate-pdf
///
/// Compiles a persisted optimization's LaTeX to PDF. The record lookup is
/// scoped to the caller, so an id owned by another user is a plain NotFound
/// and no bytes are returned.
pub async fn handle_generate_pdf(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<GeneratePdfRequest>,
) -> Result<Json<GeneratePdfResponse>, AppError> {
    let user = state.auth.verify(bearer_token(&headers)?).await?;

    let record = sqlx::query_as::<_, GenerationRecordRow>(
        "SELECT * FROM optimizations WHERE id = $1 AND user_id = $2",
    )
    .bind(request.optimization_id)
    .bind(user.id)
    .fetch_optional(&state.db)
    .await?
    .ok_or_else(|| {
        AppError::NotFound(format!(
            "Optimization {} not found",
            request.optimization_id
        ))
    })?;

    let pdf_bytes = state.renderer.render(&record.optimized_latex).await?;

    Ok(Json(GeneratePdfResponse {
        pdf: BASE64.encode(&pdf_bytes),
    }))
}
