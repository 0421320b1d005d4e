//! Handlers for the `/categories` resource.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use notebook_db::models::category::CategoryInput;

use super::{bind, parse_id};
use crate::error::AppResult;
use crate::query::PageParams;
use crate::response::WebResponse;
use crate::state::AppState;

const ENTITY: &str = "category";

// ---------------------------------------------------------------------------
// Read handlers
// ---------------------------------------------------------------------------

/// GET /categories?page=&pageSize=
pub async fn list_categories(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<impl IntoResponse> {
    let categories = state
        .categories
        .get_all(params.page(), params.page_size())
        .await?;
    Ok(Json(WebResponse::ok(categories)))
}

/// GET /categories/{id}
pub async fn get_category(
    State(state): State<AppState>,
    raw_id: Result<Path<String>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id(raw_id, ENTITY)?;
    let category = state.categories.get_by_id(id).await?;
    Ok(Json(WebResponse::ok(category)))
}

// ---------------------------------------------------------------------------
// Write handlers
// ---------------------------------------------------------------------------

/// POST /categories
pub async fn create_category(
    State(state): State<AppState>,
    payload: Result<Json<CategoryInput>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let input = bind(payload)?;
    let category = state.categories.create(input).await?;
    Ok(Json(WebResponse::ok(category)))
}

/// PUT /categories/{id}
pub async fn update_category(
    State(state): State<AppState>,
    raw_id: Result<Path<String>, PathRejection>,
    payload: Result<Json<CategoryInput>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id(raw_id, ENTITY)?;
    let input = bind(payload)?;
    let category = state.categories.update(id, input).await?;
    Ok(Json(WebResponse::ok(category)))
}

/// DELETE /categories/{id}
pub async fn delete_category(
    State(state): State<AppState>,
    raw_id: Result<Path<String>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id(raw_id, ENTITY)?;
    state.categories.delete(id).await?;
    Ok(Json(WebResponse::empty()))
}
