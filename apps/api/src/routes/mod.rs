pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::state::AppState;
use crate::{documents, history, jobs, optimize, render, settings};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Master documents (resume / cover letter template, versioned)
        .route(
            "/api/v1/documents/:kind",
            get(documents::handlers::handle_get_document)
                .put(documents::handlers::handle_save_document),
        )
        // Job descriptions
        .route(
            "/api/v1/job-descriptions",
            post(jobs::handle_create_job).get(jobs::handle_list_jobs),
        )
        // Settings
        .route(
            "/api/v1/settings",
            put(settings::handle_save_settings).get(settings::handle_get_settings),
        )
        // Optimization pipeline
        .route(
            "/api/v1/optimize-resume",
            post(optimize::handlers::handle_optimize_resume),
        )
        .route(
            "/api/v1/generate-cover-letter",
            post(optimize::handlers::handle_generate_cover_letter),
        )
        // PDF rendering
        .route(
            "/api/v1/generate-pdf",
            post(render::handlers::handle_generate_pdf),
        )
        // History feed
        .route("/api/v1/history", get(history::handlers::handle_history))
        .with_state(state)
}
