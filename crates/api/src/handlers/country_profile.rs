//! Read handlers for project-scoped country profiles.
//!
//! Profiles are only ever written by the generation pipeline's result
//! persister, so this resource is read-only over HTTP.

use axum::extract::{Path, State};
use axum::Json;

use munprep_core::types::DbId;
use munprep_db::models::country_profile::CountryProfile;
use munprep_db::repositories::CountryProfileRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/v1/projects/{project_id}/profile
///
/// The most recent profile for the project, or `null`.
pub async fn get_latest(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Option<CountryProfile>>> {
    let profile = CountryProfileRepo::find_latest_by_project(&state.pool, project_id).await?;
    Ok(Json(profile))
}

/// GET /api/v1/projects/{project_id}/profiles
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<CountryProfile>>> {
    let profiles = CountryProfileRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(profiles))
}
