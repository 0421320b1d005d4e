use notebook_core::types::DbId;
use notebook_core::validation::ValidatedInput;
use notebook_db::models::note::{NoteInput, NoteView};
use notebook_db::repositories::{CategoryRepo, NoteRepo};
use notebook_db::DbPool;

use super::abort;
use crate::error::{AppError, AppResult};

const ENTITY: &str = "note";

/// Note use cases. Every note must point at an existing category when it is
/// written.
#[derive(Clone)]
pub struct NoteService {
    pool: DbPool,
}

impl NoteService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn get_all(&self, page: i64, page_size: i64) -> AppResult<Vec<NoteView>> {
        let mut conn = self.pool.acquire().await?;
        Ok(NoteRepo::find_all(&mut conn, page, page_size).await?)
    }

    /// A lookup error, a missing row, and a row with an empty title all
    /// read as "not found".
    pub async fn get_by_id(&self, id: DbId) -> AppResult<NoteView> {
        let mut conn = self.pool.acquire().await?;
        match NoteRepo::find_by_id(&mut conn, id).await {
            Ok(Some(note)) if !note.title.is_empty() => Ok(note),
            Ok(_) => Err(AppError::not_found(ENTITY)),
            Err(err) => {
                tracing::warn!(note_id = id, error = %err, "Note lookup failed");
                Err(AppError::not_found(ENTITY))
            }
        }
    }

    /// Create a note. The returned category name comes from the lookup made
    /// before the insert.
    pub async fn create(&self, input: NoteInput) -> AppResult<NoteView> {
        input.check()?;

        let mut tx = self.pool.begin().await?;
        let Some(category) = CategoryRepo::find_by_id(&mut tx, input.id_category).await? else {
            return Err(AppError::bad_request("category did not exists"));
        };

        let record = input.into_note(0);
        let note = match NoteRepo::save(&mut tx, &record).await {
            Ok(note) => note,
            Err(err) => return Err(abort(tx, err).await),
        };
        tx.commit().await?;

        tracing::info!(note_id = note.id, category_id = category.id, "Note created");
        Ok(NoteView {
            id: note.id,
            title: note.title,
            body: note.body,
            category: category.name,
        })
    }

    /// Replace every field of an existing note.
    pub async fn update(&self, id: DbId, input: NoteInput) -> AppResult<NoteView> {
        input.check()?;

        let mut tx = self.pool.begin().await?;
        if !NoteRepo::exists_by_id(&mut tx, id).await? {
            return Err(AppError::not_found(ENTITY));
        }

        let Some(category) = CategoryRepo::find_by_id(&mut tx, input.id_category).await? else {
            return Err(AppError::bad_request("category does not exists"));
        };

        let record = input.into_note(id);
        let note = match NoteRepo::save(&mut tx, &record).await {
            Ok(note) => note,
            Err(err) => return Err(abort(tx, err).await),
        };
        tx.commit().await?;

        tracing::info!(note_id = id, category_id = category.id, "Note updated");
        Ok(NoteView {
            id: note.id,
            title: note.title,
            body: note.body,
            category: category.name,
        })
    }

    pub async fn delete(&self, id: DbId) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;
        if !NoteRepo::exists_by_id(&mut tx, id).await? {
            return Err(AppError::not_found(ENTITY));
        }

        if let Err(err) = NoteRepo::delete(&mut tx, id).await {
            return Err(abort(tx, err).await);
        }
        tx.commit().await?;

        tracing::info!(note_id = id, "Note deleted");
        Ok(())
    }
}
