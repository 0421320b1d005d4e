pub mod category;
pub mod health;
pub mod note;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /categories                 list (?page, pageSize), create
/// /categories/{id}            get, update, delete
///
/// /notes                      list (?page, pageSize), create
/// /notes/{id}                 get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/categories", category::router())
        .nest("/notes", note::router())
}
