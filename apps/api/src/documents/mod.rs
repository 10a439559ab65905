//! Master document storage.
//!
//! Versioning is append-only: "updating" a document inserts a new row and
//! flips the previous current row to non-current. Both writes happen inside
//! one transaction so a crash can never leave zero or two current rows for
//! a (user, kind) pair.

pub mod handlers;

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::document::{DocumentKind, DocumentRow};

const LATEST_VERSION_FOR_UPDATE: &str = r#"
    SELECT version FROM documents
    WHERE user_id = $1 AND kind = $2
    ORDER BY version DESC
    LIMIT 1
    FOR UPDATE
"#;

/// Returns the current document of the given kind, if the user has one.
pub async fn current_document(
    pool: &PgPool,
    user_id: Uuid,
    kind: DocumentKind,
) -> Result<Option<DocumentRow>, AppError> {
    let row = sqlx::query_as::<_, DocumentRow>(
        "SELECT * FROM documents WHERE user_id = $1 AND kind = $2 AND is_current = true",
    )
    .bind(user_id)
    .bind(kind.as_str())
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

/// Saves a new version of the user's document and makes it current.
///
/// The previous current row (if any) is demoted and the new row inserted
/// with `version = max + 1`, atomically.
pub async fn save_document(
    pool: &PgPool,
    user_id: Uuid,
    kind: DocumentKind,
    content: &str,
) -> Result<DocumentRow, AppError> {
    let mut tx = pool.begin().await?;

    // Lock the latest version row so concurrent saves for the same
    // (user, kind) serialize instead of colliding on the unique index.
    // Two concurrent first-ever saves can still collide; the index backstops.
    let current_max: Option<i32> = sqlx::query_scalar(LATEST_VERSION_FOR_UPDATE)
        .bind(user_id)
        .bind(kind.as_str())
        .fetch_optional(&mut *tx)
        .await?;
    let new_version = next_version(current_max);

    sqlx::query(
        "UPDATE documents SET is_current = false WHERE user_id = $1 AND kind = $2 AND is_current = true",
    )
    .bind(user_id)
    .bind(kind.as_str())
    .execute(&mut *tx)
    .await?;

    let row = sqlx::query_as::<_, DocumentRow>(
        r#"
        INSERT INTO documents (id, user_id, kind, content, version, is_current)
        VALUES ($1, $2, $3, $4, $5, true)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(kind.as_str())
    .bind(content)
    .bind(new_version)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    info!(
        "Saved {} version {} for user {}",
        kind.label(),
        new_version,
        user_id
    );

    Ok(row)
}

fn next_version(current_max: Option<i32>) -> i32 {
    current_max.unwrap_or(0) + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_save_is_version_one() {
        assert_eq!(next_version(None), 1);
    }

    #[test]
    fn test_version_increments_from_max() {
        assert_eq!(next_version(Some(1)), 2);
        assert_eq!(next_version(Some(7)), 8);
    }

    #[test]
    fn test_version_lookup_locks_latest_row() {
        assert!(LATEST_VERSION_FOR_UPDATE.contains("FOR UPDATE"));
        assert!(LATEST_VERSION_FOR_UPDATE.contains("ORDER BY version DESC"));
    }
}
