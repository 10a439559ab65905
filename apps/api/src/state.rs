use std::sync::Arc;

use sqlx::PgPool;

use crate::auth::TokenVerifier;
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::render::PdfRenderer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub llm: LlmClient,
    /// Pluggable LaTeX-to-PDF backend. Default: latexonline.cc-compatible
    /// service at RENDERER_URL.
    pub renderer: Arc<dyn PdfRenderer>,
    /// Pluggable bearer-token verifier backed by the external identity service.
    pub auth: Arc<dyn TokenVerifier>,
    /// Loaded configuration, kept for handlers that need endpoint settings.
    #[allow(dead_code)]
    pub config: Config,
}
