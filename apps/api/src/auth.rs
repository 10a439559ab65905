//! Bearer-token verification against the external identity service.
//!
//! The service never checks credentials itself. Every protected handler
//! extracts the bearer token and asks the injected `TokenVerifier` for the
//! identity behind it; any failure collapses to `AppError::Unauthorized`.

use async_trait::async_trait;
use axum::http::{header, HeaderMap};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;

/// The authenticated caller. The identity service owns everything else we
/// might know about the user; the pipeline only ever needs the id.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub id: Uuid,
}

/// Pluggable credential verifier. Implement this to swap identity backends
/// without touching the handlers.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> Result<AuthUser, AppError>;
}

#[derive(Debug, Deserialize)]
struct IdentityResponse {
    id: Uuid,
}

/// Verifier backed by a GoTrue-style identity endpoint
/// (`GET {base_url}/auth/v1/user` with the caller's bearer token).
pub struct HttpTokenVerifier {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpTokenVerifier {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(10))
                .build()
                .expect("Failed to build HTTP client"),
            base_url,
            api_key,
        }
    }
}

#[async_trait]
impl TokenVerifier for HttpTokenVerifier {
    async fn verify(&self, token: &str) -> Result<AuthUser, AppError> {
        let url = format!("{}/auth/v1/user", self.base_url.trim_end_matches('/'));

        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .header("apikey", &self.api_key)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Identity service unreachable: {e}");
                AppError::Unauthorized
            })?;

        if !response.status().is_success() {
            return Err(AppError::Unauthorized);
        }

        let identity: IdentityResponse =
            response.json().await.map_err(|_| AppError::Unauthorized)?;

        Ok(AuthUser { id: identity.id })
    }
}

/// Extracts the bearer token from the `Authorization` header.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AppError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(AppError::Unauthorized)?
        .to_str()
        .map_err(|_| AppError::Unauthorized)?;

    value
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or(AppError::Unauthorized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_bearer_token_extracts_token() {
        let headers = headers_with("Bearer abc.def.ghi");
        assert_eq!(bearer_token(&headers).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn test_missing_header_is_unauthorized() {
        let headers = HeaderMap::new();
        assert!(matches!(
            bearer_token(&headers),
            Err(AppError::Unauthorized)
        ));
    }

    #[test]
    fn test_wrong_scheme_is_unauthorized() {
        let headers = headers_with("Basic dXNlcjpwYXNz");
        assert!(matches!(
            bearer_token(&headers),
            Err(AppError::Unauthorized)
        ));
    }

    #[test]
    fn test_empty_token_is_unauthorized() {
        let headers = headers_with("Bearer ");
        assert!(matches!(
            bearer_token(&headers),
            Err(AppError::Unauthorized)
        ));
    }
}
