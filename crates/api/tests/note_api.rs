//! HTTP-level integration tests for the `/api/notes` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_note_then_get_round_trips(pool: PgPool) {
    let category_id = common::create_category(&pool, "Recipes").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/notes",
        serde_json::json!({"title": "Pancakes", "body": "Flour, eggs, milk", "id_category": category_id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let created = body_json(response).await;
    let id = created["data"]["id"].as_i64().unwrap();
    assert!(id > 0);
    assert_eq!(created["data"]["title"], "Pancakes");
    assert_eq!(created["data"]["body"], "Flour, eggs, milk");
    assert_eq!(created["data"]["category"], "Recipes");

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/notes/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"], created["data"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_note_with_missing_category_is_bad_request(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/notes",
        serde_json::json!({"title": "Orphan", "body": "No home", "id_category": 999999}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], 400);
    assert_eq!(json["status"], "BAD REQUEST");
    assert_eq!(json["message"], "category did not exists");

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/notes").await).await;
    assert_eq!(json["data"], serde_json::json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_note_validation_messages(pool: PgPool) {
    let category_id = common::create_category(&pool, "Work").await;
    let cases = [
        (
            serde_json::json!({"title": "a", "body": "fine body", "id_category": category_id}),
            "Title is should more than 2 characters",
        ),
        (
            serde_json::json!({"title": "fine", "body": "b", "id_category": category_id}),
            "Body is should more than 2 characters",
        ),
        (
            serde_json::json!({"title": "fine", "body": "b".repeat(256), "id_category": category_id}),
            "Body is should below than 255 characters",
        ),
        (
            serde_json::json!({"title": "fine", "body": "fine body", "id_category": 0}),
            "CategoryId is required",
        ),
        (
            serde_json::json!({"title": "fine", "body": "fine body"}),
            "CategoryId is required",
        ),
        (
            serde_json::json!({"title": "fine", "body": "fine body", "id_category": -3}),
            "CategoryId is should greater than 0",
        ),
        (
            serde_json::json!({"body": "fine body", "id_category": category_id}),
            "Title is required",
        ),
        (
            serde_json::json!({"title": "a", "body": "b", "id_category": 0}),
            "Title is should more than 2 characters",
        ),
    ];

    for (body, expected) in cases {
        let app = common::build_test_app(pool.clone());
        let response = post_json(app, "/api/notes", body.clone()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body}");
        let json = body_json(response).await;
        assert_eq!(json["message"], expected, "body: {body}");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_note_replaces_fields_and_category(pool: PgPool) {
    let work = common::create_category(&pool, "Work").await;
    let home = common::create_category(&pool, "Home").await;
    let id = common::create_note(&pool, "Draft", "First pass", work).await;

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/notes/{id}"),
        serde_json::json!({"title": "Final", "body": "Second pass", "id_category": home}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], id);
    assert_eq!(json["data"]["title"], "Final");
    assert_eq!(json["data"]["category"], "Home");

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/notes/{id}")).await).await;
    assert_eq!(json["data"]["body"], "Second pass");
    assert_eq!(json["data"]["category"], "Home");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_note_with_missing_category_is_bad_request(pool: PgPool) {
    let category_id = common::create_category(&pool, "Work").await;
    let id = common::create_note(&pool, "Draft", "First pass", category_id).await;

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/notes/{id}"),
        serde_json::json!({"title": "Draft", "body": "First pass", "id_category": 999999}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["message"], "category does not exists");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_missing_note_returns_404(pool: PgPool) {
    let category_id = common::create_category(&pool, "Work").await;

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        "/api/notes/999999",
        serde_json::json!({"title": "Ghost", "body": "Nothing here", "id_category": category_id}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["status"], "NOT FOUND");
    assert_eq!(json["message"], "note not found");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn non_numeric_note_id_is_not_found(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/notes/twelve").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message"], "note not found");

    let app = common::build_test_app(pool);
    let response = delete(app, "/api/notes/twelve").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message"], "note not found");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn undecodable_note_id_is_not_found_on_every_verb(pool: PgPool) {
    let category_id = common::create_category(&pool, "Work").await;

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/notes/%FF").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message"], "note not found");

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        "/api/notes/%FF",
        serde_json::json!({"title": "Valid", "body": "Valid body", "id_category": category_id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["status"], "NOT FOUND");
    assert_eq!(json["message"], "note not found");

    let app = common::build_test_app(pool);
    let response = delete(app, "/api/notes/%FF").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message"], "note not found");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_notes_is_ordered_and_paginated(pool: PgPool) {
    let work = common::create_category(&pool, "Work").await;
    let home = common::create_category(&pool, "Home").await;
    let mut ids = Vec::new();
    for n in 1..=5 {
        let category_id = if n % 2 == 0 { home } else { work };
        ids.push(common::create_note(&pool, &format!("Note {n}"), "Body text", category_id).await);
    }

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/notes").await).await;
    let data = json["data"].as_array().unwrap();
    let listed: Vec<i64> = data.iter().map(|n| n["id"].as_i64().unwrap()).collect();
    assert_eq!(listed, ids);
    assert_eq!(data[0]["category"], "Work");
    assert_eq!(data[1]["category"], "Home");

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/notes?page=2&pageSize=2").await).await;
    let listed: Vec<i64> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["id"].as_i64().unwrap())
        .collect();
    assert_eq!(listed, ids[2..4].to_vec());

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/notes?page=9&pageSize=2").await).await;
    assert_eq!(json["data"], serde_json::json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_note_twice_returns_200_then_404(pool: PgPool) {
    let category_id = common::create_category(&pool, "Work").await;
    let id = common::create_note(&pool, "Temporary", "Soon gone", category_id).await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/notes/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json, serde_json::json!({"code": 200, "status": "OK"}));

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/notes/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message"], "note not found");

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/categories/{category_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
}
