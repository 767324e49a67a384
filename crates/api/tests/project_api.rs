//! HTTP-level integration tests for the project, source, profile, and
//! output endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use sqlx::PgPool;

const UNUSED_GATEWAY: &str = "http://127.0.0.1:9";

fn project_body(name: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "committee": "DISEC",
        "topic": "Disarmament",
        "chair_report": "The committee notes rising tensions."
    })
}

async fn create_project(pool: &PgPool, name: &str) -> String {
    let app = common::build_test_app(pool.clone(), UNUSED_GATEWAY);
    let response = post_json(app, "/api/v1/projects", project_body(name)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    json["id"].as_str().expect("uuid id").to_string()
}

// ---------------------------------------------------------------------------
// Project CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_project_returns_201(pool: PgPool) {
    let app = common::build_test_app(pool, UNUSED_GATEWAY);
    let response = post_json(app, "/api/v1/projects", project_body("Geneva 2026")).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Geneva 2026");
    assert_eq!(json["committee"], "DISEC");
    assert!(json["id"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_project_with_blank_name_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool, UNUSED_GATEWAY);
    let response = post_json(app, "/api/v1/projects", project_body("  ")).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_project_by_id(pool: PgPool) {
    let id = create_project(&pool, "Get Me").await;

    let app = common::build_test_app(pool, UNUSED_GATEWAY);
    let response = get(app, &format!("/api/v1/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["name"], "Get Me");
    assert_eq!(json["chair_report"], "The committee notes rising tensions.");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_nonexistent_project_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool, UNUSED_GATEWAY);
    let random_id = uuid::Uuid::new_v4();
    let response = get(app, &format!("/api/v1/projects/{random_id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_project_returns_204_then_404(pool: PgPool) {
    let id = create_project(&pool, "Delete Me").await;

    let app = common::build_test_app(pool.clone(), UNUSED_GATEWAY);
    let response = delete(app, &format!("/api/v1/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool, UNUSED_GATEWAY);
    let response = get(app, &format!("/api/v1/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Sources
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn save_source_then_list(pool: PgPool) {
    let id = create_project(&pool, "Sources").await;

    let app = common::build_test_app(pool.clone(), UNUSED_GATEWAY);
    let response = put_json(
        app,
        &format!("/api/v1/projects/{id}/sources"),
        serde_json::json!({ "kind": "main_resolution", "text": "Operative clause 1." }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let saved = body_json(response).await;
    assert_eq!(saved["kind"], "main_resolution");

    let app = common::build_test_app(pool, UNUSED_GATEWAY);
    let response = get(app, &format!("/api/v1/projects/{id}/sources")).await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["text"], "Operative clause 1.");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn save_blank_source_clears_slot(pool: PgPool) {
    let id = create_project(&pool, "Blank source").await;

    let app = common::build_test_app(pool.clone(), UNUSED_GATEWAY);
    put_json(
        app,
        &format!("/api/v1/projects/{id}/sources"),
        serde_json::json!({ "kind": "co_resolution", "text": "Co text" }),
    )
    .await;

    let app = common::build_test_app(pool.clone(), UNUSED_GATEWAY);
    let response = put_json(
        app,
        &format!("/api/v1/projects/{id}/sources"),
        serde_json::json!({ "kind": "co_resolution", "text": "" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::Value::Null);

    let app = common::build_test_app(pool, UNUSED_GATEWAY);
    let response = get(app, &format!("/api/v1/projects/{id}/sources")).await;
    let json = body_json(response).await;
    assert!(json.as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn save_source_for_missing_project_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool, UNUSED_GATEWAY);
    let random_id = uuid::Uuid::new_v4();
    let response = put_json(
        app,
        &format!("/api/v1/projects/{random_id}/sources"),
        serde_json::json!({ "kind": "main_resolution", "text": "Text" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn save_source_rejects_unknown_kind(pool: PgPool) {
    let id = create_project(&pool, "Bad kind").await;

    let app = common::build_test_app(pool, UNUSED_GATEWAY);
    let response = put_json(
        app,
        &format!("/api/v1/projects/{id}/sources"),
        serde_json::json!({ "kind": "appendix", "text": "Text" }),
    )
    .await;
    // Serde rejects the unknown enum variant during extraction.
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// ---------------------------------------------------------------------------
// Profiles and outputs (read-only surface)
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn latest_profile_is_null_before_generation(pool: PgPool) {
    let id = create_project(&pool, "No profile").await;

    let app = common::build_test_app(pool, UNUSED_GATEWAY);
    let response = get(app, &format!("/api/v1/projects/{id}/profile")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::Value::Null);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn outputs_start_empty(pool: PgPool) {
    let id = create_project(&pool, "No outputs").await;

    let app = common::build_test_app(pool, UNUSED_GATEWAY);
    let response = get(app, &format!("/api/v1/projects/{id}/outputs")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await.as_array().unwrap().is_empty());
}
