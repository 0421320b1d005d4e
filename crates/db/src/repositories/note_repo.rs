//! Repository for the `notes` table.
//!
//! Reads always inner-join `categories` and return [`NoteView`] rows that
//! carry the category name; writes operate on plain [`Note`] rows.

use notebook_core::pagination::page_window;
use notebook_core::types::DbId;
use sqlx::PgConnection;

use crate::models::note::{Note, NoteView};

/// Column list for notes queries.
const COLUMNS: &str = "id, title, body, category_id";

/// Projection columns for `notes n JOIN categories c`.
const VIEW_COLUMNS: &str = "n.id, n.title, n.body, c.name AS category";

/// Provides CRUD operations for notes.
pub struct NoteRepo;

impl NoteRepo {
    /// List notes with their category names, ascending by note id.
    ///
    /// Paginated when both `page` and `page_size` are positive.
    pub async fn find_all(
        conn: &mut PgConnection,
        page: i64,
        page_size: i64,
    ) -> Result<Vec<NoteView>, sqlx::Error> {
        let base = format!(
            "SELECT {VIEW_COLUMNS} FROM notes n \
             INNER JOIN categories c ON c.id = n.category_id \
             ORDER BY n.id ASC"
        );
        match page_window(page, page_size) {
            Some(window) => {
                let query = format!("{base} LIMIT $1 OFFSET $2");
                sqlx::query_as::<_, NoteView>(&query)
                    .bind(window.limit)
                    .bind(window.offset)
                    .fetch_all(&mut *conn)
                    .await
            }
            None => {
                sqlx::query_as::<_, NoteView>(&base)
                    .fetch_all(&mut *conn)
                    .await
            }
        }
    }

    /// Find a note by ID, joined with its category name.
    pub async fn find_by_id(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<NoteView>, sqlx::Error> {
        let query = format!(
            "SELECT {VIEW_COLUMNS} FROM notes n \
             INNER JOIN categories c ON c.id = n.category_id \
             WHERE n.id = $1"
        );
        sqlx::query_as::<_, NoteView>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
    }

    pub async fn exists_by_id(conn: &mut PgConnection, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM notes WHERE id = $1)")
            .bind(id)
            .fetch_one(&mut *conn)
            .await
    }

    /// Insert the note when `id` is `0`, otherwise replace every column of
    /// the row with that id (inserting it if missing).
    pub async fn save(conn: &mut PgConnection, note: &Note) -> Result<Note, sqlx::Error> {
        if note.id == 0 {
            let query = format!(
                "INSERT INTO notes (title, body, category_id) VALUES ($1, $2, $3)
                 RETURNING {COLUMNS}"
            );
            return sqlx::query_as::<_, Note>(&query)
                .bind(&note.title)
                .bind(&note.body)
                .bind(note.category_id)
                .fetch_one(&mut *conn)
                .await;
        }

        let query = format!(
            "INSERT INTO notes (id, title, body, category_id) VALUES ($1, $2, $3, $4)
             ON CONFLICT (id) DO UPDATE SET
                title = EXCLUDED.title,
                body = EXCLUDED.body,
                category_id = EXCLUDED.category_id
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(note.id)
            .bind(&note.title)
            .bind(&note.body)
            .bind(note.category_id)
            .fetch_one(&mut *conn)
            .await
    }

    /// Delete a note by ID. Returns `true` if a row was deleted.
    pub async fn delete(conn: &mut PgConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
