//! Repository for the `sources` table.

use sqlx::PgPool;

use munprep_core::types::DbId;

use crate::models::source::{SaveSource, Source};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, kind, text, created_at, updated_at";

/// Provides read and upsert operations for resolution sources.
pub struct SourceRepo;

impl SourceRepo {
    /// List all sources for a project, newest first.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Source>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sources
             WHERE project_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Source>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Replace the source for a (project, kind) pair.
    ///
    /// Runs delete-then-insert inside one transaction so two racing saves
    /// cannot leave two active rows for the same kind. Blank text commits
    /// the delete without inserting and returns `None`, leaving the kind
    /// absent.
    pub async fn upsert(pool: &PgPool, input: &SaveSource) -> Result<Option<Source>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM sources WHERE project_id = $1 AND kind = $2")
            .bind(input.project_id)
            .bind(input.kind.as_str())
            .execute(&mut *tx)
            .await?;

        if input.text.trim().is_empty() {
            tx.commit().await?;
            return Ok(None);
        }

        let query = format!(
            "INSERT INTO sources (project_id, kind, text)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let source = sqlx::query_as::<_, Source>(&query)
            .bind(input.project_id)
            .bind(input.kind.as_str())
            .bind(&input.text)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(source))
    }
}
