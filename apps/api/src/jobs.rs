//! Job description storage. Rows are created once per submitted posting and
//! never mutated; optimization runs reference them by id.

use axum::{extract::State, http::HeaderMap, Json};
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::bearer_token;
use crate::errors::AppError;
use crate::models::job::JobDescriptionRow;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateJobRequest {
    pub title: String,
    pub company: Option<String>,
    pub description: String,
}

/// POST /api/v1/job-descriptions
///
/// Stores a submitted job posting and returns the created row.
pub async fn handle_create_job(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<CreateJobRequest>,
) -> Result<Json<JobDescriptionRow>, AppError> {
    let user = state.auth.verify(bearer_token(&headers)?).await?;

    if request.title.trim().is_empty() {
        return Err(AppError::Validation("title cannot be empty".to_string()));
    }
    if request.description.trim().is_empty() {
        return Err(AppError::Validation(
            "description cannot be empty".to_string(),
        ));
    }

    let row = sqlx::query_as::<_, JobDescriptionRow>(
        r#"
        INSERT INTO job_descriptions (id, user_id, title, company, description)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user.id)
    .bind(request.title.trim())
    .bind(request.company.as_deref().map(str::trim))
    .bind(request.description.trim())
    .fetch_one(&state.db)
    .await?;

    Ok(Json(row))
}

/// GET /api/v1/job-descriptions
///
/// Lists the caller's stored job descriptions, newest first.
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<JobDescriptionRow>>, AppError> {
    let user = state.auth.verify(bearer_token(&headers)?).await?;

    let rows = sqlx::query_as::<_, JobDescriptionRow>(
        "SELECT * FROM job_descriptions WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user.id)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(rows))
}
