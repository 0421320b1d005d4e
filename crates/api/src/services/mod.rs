//! Service layer.
//!
//! Services validate request DTOs, translate missing rows into domain
//! errors, and own the transaction boundary of every write: lookups and the
//! mutating statement run inside one transaction that is committed on
//! success and rolled back on failure.

mod category;
mod note;

pub use category::CategoryService;
pub use note::NoteService;

use sqlx::{Postgres, Transaction};

use crate::error::AppError;

/// Roll back a transaction after a failed write and return the error to
/// report. A failed rollback replaces the original error.
pub(crate) async fn abort(tx: Transaction<'_, Postgres>, err: sqlx::Error) -> AppError {
    match tx.rollback().await {
        Ok(()) => AppError::Database(err),
        Err(rollback_err) => {
            tracing::error!(error = %err, "Rollback failed after write error");
            AppError::Database(rollback_err)
        }
    }
}
