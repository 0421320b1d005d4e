#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use tower_http::normalize_path::NormalizePath;

use notebook_api::config::ServerConfig;
use notebook_api::router::build_app;
use notebook_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
        seed_demo_data: false,
    }
}

/// Build the full application (router, middleware, path normalization) on
/// top of the given database pool, exactly as `main.rs` does.
pub fn build_test_app(pool: PgPool) -> NormalizePath<Router> {
    let config = test_config();
    let state = AppState::new(pool, Arc::new(config.clone()));
    build_app(state, &config)
}

async fn send(app: NormalizePath<Router>, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: NormalizePath<Router>, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: NormalizePath<Router>, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(
    app: NormalizePath<Router>,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send_json(app, Method::POST, uri, body.to_string()).await
}

pub async fn put_json(
    app: NormalizePath<Router>,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send_json(app, Method::PUT, uri, body.to_string()).await
}

/// Send a raw (possibly malformed) JSON body.
pub async fn send_json(
    app: NormalizePath<Router>,
    method: Method,
    uri: &str,
    body: String,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a category through the API and return its id.
pub async fn create_category(pool: &PgPool, name: &str) -> i64 {
    let app = build_test_app(pool.clone());
    let response = post_json(app, "/api/categories", serde_json::json!({ "name": name })).await;
    let json = body_json(response).await;
    json["data"]["id"]
        .as_i64()
        .unwrap_or_else(|| panic!("category create failed: {json}"))
}

/// Create a note through the API and return its id.
pub async fn create_note(pool: &PgPool, title: &str, body: &str, category_id: i64) -> i64 {
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/notes",
        serde_json::json!({ "title": title, "body": body, "id_category": category_id }),
    )
    .await;
    let json = body_json(response).await;
    json["data"]["id"]
        .as_i64()
        .unwrap_or_else(|| panic!("note create failed: {json}"))
}
