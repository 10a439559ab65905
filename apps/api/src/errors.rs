use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unauthorized")]
    Unauthorized,

    /// Transport-level failure of an upstream collaborator (LLM or PDF
    /// renderer): connect error, timeout, or non-success HTTP status.
    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    /// The upstream replied 200 but the body did not match the expected
    /// schema. Kept distinct from `UpstreamUnavailable` so operators can
    /// tell "the model replied but wrongly" from "the model did not reply".
    #[error("Malformed upstream response: {0}")]
    MalformedUpstream(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Status code this error maps to at the HTTP boundary.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::UpstreamUnavailable(_) | AppError::MalformedUpstream(_) => {
                StatusCode::BAD_GATEWAY
            }
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (code, message) = match &self {
            AppError::NotFound(msg) => ("NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => ("VALIDATION_ERROR", msg.clone()),
            AppError::Unauthorized => ("UNAUTHORIZED", "Authentication required".to_string()),
            AppError::UpstreamUnavailable(msg) => {
                tracing::error!("Upstream unavailable: {msg}");
                (
                    "UPSTREAM_UNAVAILABLE",
                    "An upstream service is unavailable".to_string(),
                )
            }
            AppError::MalformedUpstream(msg) => {
                tracing::error!("Malformed upstream response: {msg}");
                (
                    "MALFORMED_UPSTREAM_RESPONSE",
                    "An upstream service returned an unusable response".to_string(),
                )
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                ("DATABASE_ERROR", "A database error occurred".to_string())
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_failure_maps_to_401() {
        assert_eq!(AppError::Unauthorized.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_missing_input_maps_to_4xx() {
        assert_eq!(
            AppError::NotFound("no current resume".into()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Validation("missing jobDescriptionId".into()).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_upstream_failures_map_to_502_distinctly() {
        let transport = AppError::UpstreamUnavailable("connect timeout".into());
        let schema = AppError::MalformedUpstream("missing ats_score".into());
        assert_eq!(transport.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(schema.status(), StatusCode::BAD_GATEWAY);
        assert_ne!(
            std::mem::discriminant(&transport),
            std::mem::discriminant(&schema)
        );
    }

    #[test]
    fn test_persistence_failure_maps_to_500() {
        assert_eq!(
            AppError::Database(sqlx::Error::RowNotFound).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
