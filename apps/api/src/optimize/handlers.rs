//! Axum route handlers for the optimization pipeline.

use axum::{extract::State, http::HeaderMap, Json};
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::bearer_token;
use crate::errors::AppError;
use crate::models::document::DocumentKind;
use crate::models::generation::GenerationRecordRow;
use crate::optimize::pipeline::run_pipeline;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeRequest {
    pub job_description_id: Uuid,
}

/// POST /api/v1/optimize-resume
///
/// Rewrites the caller's current resume against a stored job description
/// and returns the persisted optimization record.
pub async fn handle_optimize_resume(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<OptimizeRequest>,
) -> Result<Json<GenerationRecordRow>, AppError> {
    let user = state.auth.verify(bearer_token(&headers)?).await?;

    let record = run_pipeline(
        &state.db,
        &state.llm,
        user,
        request.job_description_id,
        DocumentKind::Resume,
    )
    .await?;

    Ok(Json(record))
}

/// POST /api/v1/generate-cover-letter
///
/// Same pipeline as resume optimization, operating on the caller's current
/// cover letter template.
pub async fn handle_generate_cover_letter(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<OptimizeRequest>,
) -> Result<Json<GenerationRecordRow>, AppError> {
    let user = state.auth.verify(bearer_token(&headers)?).await?;

    let record = run_pipeline(
        &state.db,
        &state.llm,
        user,
        request.job_description_id,
        DocumentKind::CoverLetter,
    )
    .await?;

    Ok(Json(record))
}
