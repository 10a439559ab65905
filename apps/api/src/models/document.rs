use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// The two kinds of master document a user can store.
/// Both live in the `documents` table, discriminated by the `kind` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Resume,
    CoverLetter,
}

impl DocumentKind {
    /// Value stored in the `kind` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Resume => "resume",
            DocumentKind::CoverLetter => "cover_letter",
        }
    }

    /// Human-readable name used in prompts and error messages.
    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::Resume => "resume",
            DocumentKind::CoverLetter => "cover letter",
        }
    }
}

/// One stored version of a user's master document.
/// Versions are append-only; exactly one row per (user_id, kind) is current.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DocumentRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub kind: String,
    pub content: String,
    pub version: i32,
    pub is_current: bool,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_column_values() {
        assert_eq!(DocumentKind::Resume.as_str(), "resume");
        assert_eq!(DocumentKind::CoverLetter.as_str(), "cover_letter");
    }

    #[test]
    fn test_kind_deserializes_from_path_segment() {
        let kind: DocumentKind = serde_json::from_str(r#""cover_letter""#).unwrap();
        assert_eq!(kind, DocumentKind::CoverLetter);
    }
}
