//! Read handlers for the project-scoped generation output log.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use munprep_core::types::DbId;
use munprep_db::models::output::Output;
use munprep_db::repositories::OutputRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// Query parameters for GET /projects/{project_id}/outputs.
#[derive(Debug, Deserialize)]
pub struct OutputListQuery {
    /// Optional generation mode filter.
    #[serde(rename = "type")]
    pub output_type: Option<String>,
}

/// GET /api/v1/projects/{project_id}/outputs
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Query(query): Query<OutputListQuery>,
) -> AppResult<Json<Vec<Output>>> {
    let outputs =
        OutputRepo::list_by_project(&state.pool, project_id, query.output_type.as_deref()).await?;
    Ok(Json(outputs))
}
