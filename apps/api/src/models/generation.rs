use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One persisted pipeline run. The `optimizations` and
/// `cover_letter_generations` tables share this shape; `document_id`
/// references the source document version the run was built from.
///
/// The `optimized_latex` / `suggestions` / `ats_score` triple is the fixed
/// contract between the LLM adapter and storage. Rows are immutable: the
/// pipeline only ever inserts, never updates or deletes.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct GenerationRecordRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub job_description_id: Uuid,
    pub document_id: Uuid,
    pub optimized_latex: String,
    pub suggestions: String,
    pub ats_score: i32,
    pub created_at: DateTime<Utc>,
}
