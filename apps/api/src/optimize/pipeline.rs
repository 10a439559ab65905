//! Optimization Request Pipeline — orchestrates one generation run.
//!
//! Flow: load current document + job description + settings → compose prompt
//! → LLM call → validate the three-field reply → insert one immutable
//! GenerationRecord → return the persisted row verbatim.
//!
//! Steps are strictly sequential and nothing is retried: a transient LLM
//! failure fails the whole request. Every successful run inserts a new row
//! even for identical inputs — the history of attempts is the product.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::documents::current_document;
use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::models::document::DocumentKind;
use crate::models::generation::GenerationRecordRow;
use crate::models::job::JobDescriptionRow;
use crate::optimize::composer::{compose, default_template, JobPosting};
use crate::optimize::prompts::{COVER_LETTER_SYSTEM, RESUME_SYSTEM};

/// The three-field reply the LLM must produce. Anything else — missing
/// fields, non-JSON, an out-of-range score — is a malformed upstream
/// response, not a transport failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizationOutcome {
    pub optimized_latex: String,
    pub suggestions: String,
    pub ats_score: i32,
}

impl OptimizationOutcome {
    /// Boundary validation of the parsed reply.
    pub fn validate(self) -> Result<Self, AppError> {
        if self.optimized_latex.trim().is_empty() {
            return Err(AppError::MalformedUpstream(
                "optimized_latex is empty".to_string(),
            ));
        }
        if !(0..=100).contains(&self.ats_score) {
            return Err(AppError::MalformedUpstream(format!(
                "ats_score {} outside 0-100",
                self.ats_score
            )));
        }
        Ok(self)
    }
}

fn record_table(kind: DocumentKind) -> &'static str {
    match kind {
        DocumentKind::Resume => "optimizations",
        DocumentKind::CoverLetter => "cover_letter_generations",
    }
}

fn system_prompt(kind: DocumentKind) -> &'static str {
    match kind {
        DocumentKind::Resume => RESUME_SYSTEM,
        DocumentKind::CoverLetter => COVER_LETTER_SYSTEM,
    }
}

/// Runs the full pipeline for an authenticated user and returns the
/// persisted record.
pub async fn run_pipeline(
    pool: &PgPool,
    llm: &LlmClient,
    user: AuthUser,
    job_description_id: Uuid,
    kind: DocumentKind,
) -> Result<GenerationRecordRow, AppError> {
    // Load inputs. Either lookup missing zero rows terminates the run.
    let document = current_document(pool, user.id, kind)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No current {} found", kind.label())))?;

    let job = sqlx::query_as::<_, JobDescriptionRow>(
        "SELECT * FROM job_descriptions WHERE id = $1 AND user_id = $2",
    )
    .bind(job_description_id)
    .bind(user.id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Job description {job_description_id} not found")))?;

    let custom_template: Option<String> =
        sqlx::query_scalar("SELECT prompt_template FROM user_settings WHERE user_id = $1")
            .bind(user.id)
            .fetch_optional(pool)
            .await?;

    // Compose
    let template = custom_template.as_deref().unwrap_or(default_template(kind));
    let prompt = compose(
        template,
        &document.content,
        kind,
        &JobPosting {
            title: &job.title,
            company: job.company.as_deref(),
            description: &job.description,
        },
    );

    // Request + validate
    info!(
        "Running {} pipeline for user {} against job {}",
        kind.label(),
        user.id,
        job.id
    );
    let outcome = llm
        .call_json::<OptimizationOutcome>(&prompt, system_prompt(kind))
        .await
        .map_err(AppError::from)?
        .validate()?;

    // Persist one immutable record referencing source document + job.
    let query = format!(
        r#"
        INSERT INTO {table}
            (id, user_id, job_description_id, document_id,
             optimized_latex, suggestions, ats_score)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
        table = record_table(kind)
    );
    let record = sqlx::query_as::<_, GenerationRecordRow>(&query)
        .bind(Uuid::new_v4())
        .bind(user.id)
        .bind(job.id)
        .bind(document.id)
        .bind(&outcome.optimized_latex)
        .bind(&outcome.suggestions)
        .bind(outcome.ats_score)
        .fetch_one(pool)
        .await?;

    info!(
        "Persisted {} record {} (ats_score={})",
        kind.label(),
        record.id,
        record.ats_score
    );

    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(score: i32) -> OptimizationOutcome {
        OptimizationOutcome {
            optimized_latex: r"\documentclass{article}".to_string(),
            suggestions: "Added keywords.".to_string(),
            ats_score: score,
        }
    }

    #[test]
    fn test_outcome_parses_from_llm_reply() {
        let parsed: OptimizationOutcome = serde_json::from_str(
            r#"{"optimized_latex":"X","suggestions":"Y","ats_score":87}"#,
        )
        .unwrap();
        assert_eq!(parsed.optimized_latex, "X");
        assert_eq!(parsed.suggestions, "Y");
        assert_eq!(parsed.ats_score, 87);
    }

    #[test]
    fn test_missing_field_fails_to_parse() {
        let result = serde_json::from_str::<OptimizationOutcome>(
            r#"{"optimized_latex":"X","suggestions":"Y"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_score_bounds_are_inclusive() {
        assert!(outcome(0).validate().is_ok());
        assert!(outcome(100).validate().is_ok());
    }

    #[test]
    fn test_out_of_range_score_is_malformed() {
        assert!(matches!(
            outcome(101).validate(),
            Err(AppError::MalformedUpstream(_))
        ));
        assert!(matches!(
            outcome(-1).validate(),
            Err(AppError::MalformedUpstream(_))
        ));
    }

    #[test]
    fn test_empty_latex_is_malformed() {
        let bad = OptimizationOutcome {
            optimized_latex: "  ".to_string(),
            suggestions: "Y".to_string(),
            ats_score: 50,
        };
        assert!(matches!(
            bad.validate(),
            Err(AppError::MalformedUpstream(_))
        ));
    }

    #[test]
    fn test_record_tables_are_disjoint() {
        assert_eq!(record_table(DocumentKind::Resume), "optimizations");
        assert_eq!(
            record_table(DocumentKind::CoverLetter),
            "cover_letter_generations"
        );
    }
}
