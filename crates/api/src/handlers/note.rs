//! Handlers for the `/notes` resource.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use notebook_db::models::note::NoteInput;

use super::{bind, parse_id};
use crate::error::AppResult;
use crate::query::PageParams;
use crate::response::WebResponse;
use crate::state::AppState;

const ENTITY: &str = "note";

// ---------------------------------------------------------------------------
// Read handlers
// ---------------------------------------------------------------------------

/// GET /notes?page=&pageSize=
///
/// Each note carries its category's name.
pub async fn list_notes(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<impl IntoResponse> {
    let notes = state.notes.get_all(params.page(), params.page_size()).await?;
    Ok(Json(WebResponse::ok(notes)))
}

/// GET /notes/{id}
pub async fn get_note(
    State(state): State<AppState>,
    raw_id: Result<Path<String>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id(raw_id, ENTITY)?;
    let note = state.notes.get_by_id(id).await?;
    Ok(Json(WebResponse::ok(note)))
}

// ---------------------------------------------------------------------------
// Write handlers
// ---------------------------------------------------------------------------

/// POST /notes
pub async fn create_note(
    State(state): State<AppState>,
    payload: Result<Json<NoteInput>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let input = bind(payload)?;
    let note = state.notes.create(input).await?;
    Ok(Json(WebResponse::ok(note)))
}

/// PUT /notes/{id}
pub async fn update_note(
    State(state): State<AppState>,
    raw_id: Result<Path<String>, PathRejection>,
    payload: Result<Json<NoteInput>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id(raw_id, ENTITY)?;
    let input = bind(payload)?;
    let note = state.notes.update(id, input).await?;
    Ok(Json(WebResponse::ok(note)))
}

/// DELETE /notes/{id}
pub async fn delete_note(
    State(state): State<AppState>,
    raw_id: Result<Path<String>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id(raw_id, ENTITY)?;
    state.notes.delete(id).await?;
    Ok(Json(WebResponse::empty()))
}
