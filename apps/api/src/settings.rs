//! Per-user settings: the custom prompt template that replaces the built-in
//! instruction block. At most one row per user, upserted on write.

use axum::{extract::State, http::HeaderMap, Json};
use serde::{Deserialize, Serialize};

use crate::auth::bearer_token;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SaveSettingsRequest {
    pub prompt_template: String,
}

#[derive(Debug, Serialize)]
pub struct SettingsResponse {
    /// None when the user has never saved a template (the built-in default
    /// applies).
    pub prompt_template: Option<String>,
}

/// GET /api/v1/settings
pub async fn handle_get_settings(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<SettingsResponse>, AppError> {
    let user = state.auth.verify(bearer_token(&headers)?).await?;

    let prompt_template: Option<String> =
        sqlx::query_scalar("SELECT prompt_template FROM user_settings WHERE user_id = $1")
            .bind(user.id)
            .fetch_optional(&state.db)
            .await?;

    Ok(Json(SettingsResponse { prompt_template }))
}

/// PUT /api/v1/settings
pub async fn handle_save_settings(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<SaveSettingsRequest>,
) -> Result<Json<SettingsResponse>, AppError> {
    let user = state.auth.verify(bearer_token(&headers)?).await?;

    if request.prompt_template.trim().is_empty() {
        return Err(AppError::Validation(
            "prompt_template cannot be empty".to_string(),
        ));
    }

    sqlx::query(
        r#"
        INSERT INTO user_settings (user_id, prompt_template)
        VALUES ($1, $2)
        ON CONFLICT (user_id) DO UPDATE SET prompt_template = EXCLUDED.prompt_template
        "#,
    )
    .bind(user.id)
    .bind(&request.prompt_template)
    .execute(&state.db)
    .await?;

    Ok(Json(SettingsResponse {
        prompt_template: Some(request.prompt_template),
    }))
}
