//! Handlers for project-scoped resolution sources.

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;

use munprep_core::error::CoreError;
use munprep_core::types::DbId;
use munprep_db::models::source::{SaveSource, Source, SourceKind};
use munprep_db::repositories::{ProjectRepo, SourceRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Body for PUT /projects/{project_id}/sources.
#[derive(Debug, Deserialize)]
pub struct SaveSourceRequest {
    pub kind: SourceKind,
    pub text: String,
}

/// GET /api/v1/projects/{project_id}/sources
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<Source>>> {
    let sources = SourceRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(sources))
}

/// PUT /api/v1/projects/{project_id}/sources
///
/// Replaces the source for the given kind. Blank text clears the slot;
/// the response body is `null` in that case.
pub async fn save(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<SaveSourceRequest>,
) -> AppResult<Json<Option<Source>>> {
    ProjectRepo::find_by_id(&state.pool, project_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        }))?;

    let source = SourceRepo::upsert(
        &state.pool,
        &SaveSource {
            project_id,
            kind: input.kind,
            text: input.text,
        },
    )
    .await?;
    Ok(Json(source))
}
