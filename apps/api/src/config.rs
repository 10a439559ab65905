use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// Base URL of the external identity service that validates bearer tokens.
    pub auth_base_url: String,
    /// Service api key sent alongside the user's bearer token.
    pub auth_api_key: String,
    pub anthropic_api_key: String,
    /// Endpoint of the LaTeX-to-PDF compiler service.
    pub renderer_url: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            auth_base_url: require_env("AUTH_BASE_URL")?,
            auth_api_key: require_env("AUTH_API_KEY")?,
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            renderer_url: std::env::var("RENDERER_URL")
                .unwrap_or_else(|_| "https://latexonline.cc/data".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
