use notebook_core::types::DbId;
use notebook_core::validation::ValidatedInput;
use notebook_db::models::category::{Category, CategoryInput};
use notebook_db::repositories::CategoryRepo;
use notebook_db::DbPool;

use super::abort;
use crate::error::{AppError, AppResult};

const ENTITY: &str = "category";

/// Category use cases.
#[derive(Clone)]
pub struct CategoryService {
    pool: DbPool,
}

impl CategoryService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn get_all(&self, page: i64, page_size: i64) -> AppResult<Vec<Category>> {
        let mut conn = self.pool.acquire().await?;
        Ok(CategoryRepo::find_all(&mut conn, page, page_size).await?)
    }

    /// Any lookup failure, not only a missing row, reads as "not found".
    pub async fn get_by_id(&self, id: DbId) -> AppResult<Category> {
        let mut conn = self.pool.acquire().await?;
        match CategoryRepo::find_by_id(&mut conn, id).await {
            Ok(Some(category)) => Ok(category),
            Ok(None) => Err(AppError::not_found(ENTITY)),
            Err(err) => {
                tracing::warn!(category_id = id, error = %err, "Category lookup failed");
                Err(AppError::not_found(ENTITY))
            }
        }
    }

    pub async fn create(&self, input: CategoryInput) -> AppResult<Category> {
        input.check()?;

        let mut tx = self.pool.begin().await?;
        let record = Category {
            id: 0,
            name: input.name,
        };
        let category = match CategoryRepo::save(&mut tx, &record).await {
            Ok(category) => category,
            Err(err) => return Err(abort(tx, err).await),
        };
        tx.commit().await?;

        tracing::info!(category_id = category.id, "Category created");
        Ok(category)
    }

    /// Replace the name of an existing category.
    pub async fn update(&self, id: DbId, input: CategoryInput) -> AppResult<Category> {
        input.check()?;

        let mut tx = self.pool.begin().await?;
        if CategoryRepo::find_by_id(&mut tx, id).await?.is_none() {
            return Err(AppError::not_found(ENTITY));
        }

        let record = Category {
            id,
            name: input.name,
        };
        let category = match CategoryRepo::save(&mut tx, &record).await {
            Ok(category) => category,
            Err(err) => return Err(abort(tx, err).await),
        };
        tx.commit().await?;

        tracing::info!(category_id = id, "Category updated");
        Ok(category)
    }

    /// Delete a category. Its notes go with it (`ON DELETE CASCADE`).
    pub async fn delete(&self, id: DbId) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;
        if CategoryRepo::find_by_id(&mut tx, id).await?.is_none() {
            return Err(AppError::not_found(ENTITY));
        }

        if let Err(err) = CategoryRepo::delete(&mut tx, id).await {
            return Err(abort(tx, err).await);
        }
        tx.commit().await?;

        tracing::info!(category_id = id, "Category deleted");
        Ok(())
    }
}
