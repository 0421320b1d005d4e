//! Repository for the `categories` table.

use notebook_core::pagination::page_window;
use notebook_core::types::DbId;
use sqlx::PgConnection;

use crate::models::category::Category;

/// Column list for categories queries.
const COLUMNS: &str = "id, name";

/// Provides CRUD operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// List categories ordered by id, paginated when both `page` and
    /// `page_size` are positive.
    pub async fn find_all(
        conn: &mut PgConnection,
        page: i64,
        page_size: i64,
    ) -> Result<Vec<Category>, sqlx::Error> {
        match page_window(page, page_size) {
            Some(window) => {
                let query =
                    format!("SELECT {COLUMNS} FROM categories ORDER BY id ASC LIMIT $1 OFFSET $2");
                sqlx::query_as::<_, Category>(&query)
                    .bind(window.limit)
                    .bind(window.offset)
                    .fetch_all(&mut *conn)
                    .await
            }
            None => {
                let query = format!("SELECT {COLUMNS} FROM categories ORDER BY id ASC");
                sqlx::query_as::<_, Category>(&query)
                    .fetch_all(&mut *conn)
                    .await
            }
        }
    }

    /// Find a category by its ID.
    pub async fn find_by_id(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
    }

    pub async fn exists_by_id(conn: &mut PgConnection, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM categories WHERE id = $1)")
            .bind(id)
            .fetch_one(&mut *conn)
            .await
    }

    /// Insert the category when `id` is `0`, otherwise replace every column
    /// of the row with that id (inserting it if missing). Returns the stored
    /// row, including the generated id on insert.
    pub async fn save(
        conn: &mut PgConnection,
        category: &Category,
    ) -> Result<Category, sqlx::Error> {
        if category.id == 0 {
            let query = format!("INSERT INTO categories (name) VALUES ($1) RETURNING {COLUMNS}");
            return sqlx::query_as::<_, Category>(&query)
                .bind(&category.name)
                .fetch_one(&mut *conn)
                .await;
        }

        let query = format!(
            "INSERT INTO categories (id, name) VALUES ($1, $2)
             ON CONFLICT (id) DO UPDATE SET name = EXCLUDED.name
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(category.id)
            .bind(&category.name)
            .fetch_one(&mut *conn)
            .await
    }

    /// Delete a category by ID. Returns `true` if a row was deleted.
    pub async fn delete(conn: &mut PgConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
