use std::sync::Arc;

use crate::config::ServerConfig;
use crate::services::{CategoryService, NoteService};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the pool and services are handles onto the
/// same underlying connection pool).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: notebook_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    pub categories: CategoryService,
    pub notes: NoteService,
}

impl AppState {
    /// Wire services onto a single pool.
    pub fn new(pool: notebook_db::DbPool, config: Arc<ServerConfig>) -> Self {
        Self {
            categories: CategoryService::new(pool.clone()),
            notes: NoteService::new(pool.clone()),
            pool,
            config,
        }
    }
}
