mod auth;
mod config;
mod db;
mod documents;
mod errors;
mod history;
mod jobs;
mod llm_client;
mod models;
mod optimize;
mod render;
mod routes;
mod settings;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::auth::HttpTokenVerifier;
use crate::config::Config;
use crate::db::create_pool;
use crate::llm_client::LlmClient;
use crate::render::LatexOnlineRenderer;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter_directive(&config.rust_log))),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Tailor API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;

    // Initialize LLM client
    let llm = LlmClient::new(config.anthropic_api_key.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Initialize identity verifier
    let auth = Arc::new(HttpTokenVerifier::new(
        config.auth_base_url.clone(),
        config.auth_api_key.clone(),
    ));
    info!("Token verifier initialized ({})", config.auth_base_url);

    // Initialize PDF renderer gateway
    let renderer = Arc::new(LatexOnlineRenderer::new(config.renderer_url.clone()));
    info!("PDF renderer initialized ({})", config.renderer_url);

    // Build app state
    let state = AppState {
        db,
        llm,
        renderer,
        auth,
        config: config.clone(),
    };

    // Build router. One CORS layer covers every endpoint, preflight included.
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Fallback filter directive when RUST_LOG carries no directives.
/// Tracing targets use the crate's module path, so the package name must be
/// normalized to its underscore form or the directive matches nothing.
fn default_filter_directive(level: &str) -> String {
    format!("{}={}", env!("CARGO_PKG_NAME").replace('-', "_"), level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::Level;
    use tracing_subscriber::layer::SubscriberExt;

    #[test]
    fn test_default_filter_directive_uses_module_path_form() {
        assert_eq!(default_filter_directive("info"), "tailor_api=info");
    }

    #[test]
    fn test_default_filter_enables_app_module_targets() {
        let filter = EnvFilter::new(default_filter_directive("info"));
        let subscriber = tracing_subscriber::registry().with(filter);

        tracing::subscriber::with_default(subscriber, || {
            assert!(tracing::enabled!(
                target: "tailor_api::optimize::pipeline",
                Level::INFO
            ));
            assert!(tracing::enabled!(target: "tailor_api::errors", Level::ERROR));
        });
    }
}
