//! Repository for the `outputs` table.

use sqlx::PgPool;

use munprep_core::types::DbId;

use crate::models::output::{CreateOutput, Output};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, type, input_json, result_text, created_at";

/// Provides insert and read operations for the generation output log.
///
/// Outputs are immutable; there are no update or delete methods.
pub struct OutputRepo;

impl OutputRepo {
    /// Insert a new output row, returning the created row.
    pub async fn insert(pool: &PgPool, input: &CreateOutput) -> Result<Output, sqlx::Error> {
        let query = format!(
            "INSERT INTO outputs (project_id, type, input_json, result_text)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Output>(&query)
            .bind(input.project_id)
            .bind(&input.output_type)
            .bind(&input.input_json)
            .bind(&input.result_text)
            .fetch_one(pool)
            .await
    }

    /// List outputs for a project, newest first, optionally filtered by type.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
        type_filter: Option<&str>,
    ) -> Result<Vec<Output>, sqlx::Error> {
        match type_filter {
            Some(output_type) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM outputs
                     WHERE project_id = $1 AND type = $2
                     ORDER BY created_at DESC"
                );
                sqlx::query_as::<_, Output>(&query)
                    .bind(project_id)
                    .bind(output_type)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!(
                    "SELECT {COLUMNS} FROM outputs
                     WHERE project_id = $1
                     ORDER BY created_at DESC"
                );
                sqlx::query_as::<_, Output>(&query)
                    .bind(project_id)
                    .fetch_all(pool)
                    .await
            }
        }
    }
}
