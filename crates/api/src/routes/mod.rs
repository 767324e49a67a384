pub mod health;
pub mod project;

use axum::routing::post;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /projects                      list, create
/// /projects/{id}                 get, delete
/// /projects/{id}/sources         list, save (upsert by kind)
/// /projects/{id}/profile         latest country profile
/// /projects/{id}/profiles        all country profiles
/// /projects/{id}/outputs         output log (optional ?type= filter)
///
/// /generate                      run the generation pipeline
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .route("/generate", post(handlers::generate::generate))
}
