//! Document Renderer Gateway — LaTeX in, PDF bytes out.
//!
//! The gateway performs no validation of the LaTeX and no retry; a failed
//! compile is reported as-is. The backing compiler is behind the
//! `PdfRenderer` trait so the endpoint can be substituted without touching
//! the rest of the system.

pub mod handlers;

use async_trait::async_trait;
use bytes::Bytes;
use serde::Serialize;

use crate::errors::AppError;

const RENDER_TIMEOUT_SECS: u64 = 60;

/// Pluggable LaTeX-to-PDF compiler.
#[async_trait]
pub trait PdfRenderer: Send + Sync {
    async fn render(&self, latex_source: &str) -> Result<Bytes, AppError>;
}

#[derive(Debug, Serialize)]
struct RenderRequest<'a> {
    compiler: &'a str,
    resources: Vec<RenderResource<'a>>,
}

#[derive(Debug, Serialize)]
struct RenderResource<'a> {
    name: &'a str,
    content: &'a str,
}

impl<'a> RenderRequest<'a> {
    fn pdflatex(latex_source: &'a str) -> Self {
        Self {
            compiler: "pdflatex",
            resources: vec![RenderResource {
                name: "resume.tex",
                content: latex_source,
            }],
        }
    }
}

/// Renderer backed by a latexonline.cc-compatible compiler service.
pub struct LatexOnlineRenderer {
    client: reqwest::Client,
    endpoint: String,
}

impl LatexOnlineRenderer {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(RENDER_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            endpoint,
        }
    }
}

#[async_trait]
impl PdfRenderer for LatexOnlineRenderer {
    async fn render(&self, latex_source: &str) -> Result<Bytes, AppError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&RenderRequest::pdflatex(latex_source))
            .send()
            .await
            .map_err(|e| AppError::UpstreamUnavailable(format!("Renderer unreachable: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::UpstreamUnavailable(format!(
                "LaTeX compilation failed (status {status}): {body}"
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::UpstreamUnavailable(format!("Renderer read failed: {e}")))?;

        compiled_document(bytes)
    }
}

/// A compile that "succeeded" without producing a document is still a failed
/// compile, same class as a non-success status.
fn compiled_document(bytes: Bytes) -> Result<Bytes, AppError> {
    if bytes.is_empty() {
        return Err(AppError::UpstreamUnavailable(
            "Renderer returned no document".to_string(),
        ));
    }
    Ok(bytes)
}
