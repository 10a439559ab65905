//! History Aggregator — merges resume optimizations and cover letter
//! generations into one time-ordered sequence for display.
//!
//! Read-only: each call re-runs the two queries, merges, and returns.

pub mod handlers;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::errors::AppError;

pub const KIND_RESUME_OPTIMIZATION: &str = "resume_optimization";
pub const KIND_COVER_LETTER_GENERATION: &str = "cover_letter_generation";

/// The job description summary attached to each history entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobSummary {
    pub title: String,
    pub company: Option<String>,
    pub description: String,
}

/// One row of the merged history feed.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub kind: &'static str,
    pub job_description: JobSummary,
    pub created_at: DateTime<Utc>,
    pub ats_score: i32,
    pub suggestions: String,
}

/// Generation record joined with its job description.
#[derive(Debug, Clone, FromRow)]
struct HistoryQueryRow {
    id: Uuid,
    created_at: DateTime<Utc>,
    ats_score: i32,
    suggestions: String,
    title: String,
    company: Option<String>,
    description: String,
}

impl HistoryQueryRow {
    fn into_entry(self, kind: &'static str) -> HistoryEntry {
        HistoryEntry {
            id: self.id,
            kind,
            job_description: JobSummary {
                title: self.title,
                company: self.company,
                description: self.description,
            },
            created_at: self.created_at,
            ats_score: self.ats_score,
            suggestions: self.suggestions,
        }
    }
}

async fn fetch_records(
    pool: &PgPool,
    user_id: Uuid,
    table: &str,
    kind: &'static str,
) -> Result<Vec<HistoryEntry>, AppError> {
    let query = format!(
        r#"
        SELECT g.id, g.created_at, g.ats_score, g.suggestions,
               j.title, j.company, j.description
        FROM {table} g
        JOIN job_descriptions j ON j.id = g.job_description_id
        WHERE g.user_id = $1
        ORDER BY g.created_at DESC
        "#
    );
    let rows = sqlx::query_as::<_, HistoryQueryRow>(&query)
        .bind(user_id)
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(|r| r.into_entry(kind)).collect())
}

/// Merges the two record collections, ordered by `created_at` descending.
/// The sort is stable, so ties keep their input order.
pub fn merge_history(
    optimizations: Vec<HistoryEntry>,
    cover_letters: Vec<HistoryEntry>,
) -> Vec<HistoryEntry> {
    let mut merged = optimizations;
    merged.extend(cover_letters);
    merged.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    merged
}

/// Returns the caller's full generation history, newest first.
pub async fn list_history(pool: &PgPool, user_id: Uuid) -> Result<Vec<HistoryEntry>, AppError> {
    let optimizations =
        fetch_records(pool, user_id, "optimizations", KIND_RESUME_OPTIMIZATION).await?;
    let cover_letters = fetch_records(
        pool,
        user_id,
        "cover_letter_generations",
        KIND_COVER_LETTER_GENERATION,
    )
    .await?;

    Ok(merge_history(optimizations, cover_letters))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn entry(kind: &'static str, secs: i64) -> HistoryEntry {
        HistoryEntry {
            id: Uuid::new_v4(),
            kind,
            job_description: JobSummary {
                title: "Engineer".to_string(),
                company: None,
                description: "desc".to_string(),
            },
            created_at: Utc.timestamp_opt(secs, 0).unwrap(),
            ats_score: 80,
            suggestions: String::new(),
        }
    }

    #[test]
    fn test_merge_orders_by_created_at_descending() {
        let opts = vec![
            entry(KIND_RESUME_OPTIMIZATION, 300),
            entry(KIND_RESUME_OPTIMIZATION, 100),
        ];
        let letters = vec![
            entry(KIND_COVER_LETTER_GENERATION, 400),
            entry(KIND_COVER_LETTER_GENERATION, 200),
        ];

        let merged = merge_history(opts, letters);
        let times: Vec<i64> = merged.iter().map(|e| e.created_at.timestamp()).collect();
        assert_eq!(times, vec![400, 300, 200, 100]);
    }

    #[test]
    fn test_merge_is_nonincreasing_for_any_interleaving() {
        let opts = vec![
            entry(KIND_RESUME_OPTIMIZATION, 50),
            entry(KIND_RESUME_OPTIMIZATION, 500),
            entry(KIND_RESUME_OPTIMIZATION, 5),
        ];
        let letters = vec![entry(KIND_COVER_LETTER_GENERATION, 250)];

        let merged = merge_history(opts, letters);
        assert!(merged
            .windows(2)
            .all(|w| w[0].created_at >= w[1].created_at));
    }

    #[test]
    fn test_ties_are_stable_against_input_order() {
        let opt = entry(KIND_RESUME_OPTIMIZATION, 100);
        let letter = entry(KIND_COVER_LETTER_GENERATION, 100);
        let opt_id = opt.id;
        let letter_id = letter.id;

        let merged = merge_history(vec![opt], vec![letter]);
        assert_eq!(merged[0].id, opt_id);
        assert_eq!(merged[1].id, letter_id);
    }

    #[test]
    fn test_empty_collections_merge_to_empty() {
        assert!(merge_history(vec![], vec![]).is_empty());
    }

    #[test]
    fn test_single_collection_passes_through() {
        let letters = vec![
            entry(KIND_COVER_LETTER_GENERATION, 2),
            entry(KIND_COVER_LETTER_GENERATION, 1),
        ];
        let merged = merge_history(vec![], letters);
        assert_eq!(merged.len(), 2);
        assert!(merged.iter().all(|e| e.kind == KIND_COVER_LETTER_GENERATION));
    }
}
