//! Route definitions for the `/projects` resource.
//!
//! Also mounts the project-scoped source, profile, and output routes
//! under `/projects/{project_id}/...`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{country_profile, output, project, source};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                        -> list
/// POST   /                        -> create
/// GET    /{id}                    -> get_by_id
/// DELETE /{id}                    -> delete
///
/// GET    /{project_id}/sources    -> list_by_project
/// PUT    /{project_id}/sources    -> save (upsert by kind)
/// GET    /{project_id}/profile    -> get_latest
/// GET    /{project_id}/profiles   -> list_by_project
/// GET    /{project_id}/outputs    -> list_by_project (?type= filter)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route("/{id}", get(project::get_by_id).delete(project::delete))
        .route(
            "/{project_id}/sources",
            get(source::list_by_project).put(source::save),
        )
        .route("/{project_id}/profile", get(country_profile::get_latest))
        .route(
            "/{project_id}/profiles",
            get(country_profile::list_by_project),
        )
        .route("/{project_id}/outputs", get(output::list_by_project))
}
