//! Demo data for local development.

use crate::models::category::Category;
use crate::models::note::Note;
use crate::repositories::{CategoryRepo, NoteRepo};
use crate::DbPool;

const DEMO_CATEGORIES: usize = 3;
const DEMO_NOTES: usize = 5;

/// Insert a handful of categories and notes into an empty database.
///
/// Does nothing (and returns `false`) when any category already exists.
/// Notes are spread round-robin across the seeded categories.
pub async fn seed_demo_data(pool: &DbPool) -> Result<bool, sqlx::Error> {
    let mut tx = pool.begin().await?;

    if !CategoryRepo::find_all(&mut tx, 1, 1).await?.is_empty() {
        return Ok(false);
    }

    let mut categories = Vec::with_capacity(DEMO_CATEGORIES);
    for n in 1..=DEMO_CATEGORIES {
        let category = Category {
            id: 0,
            name: format!("Category {n}"),
        };
        categories.push(CategoryRepo::save(&mut tx, &category).await?);
    }

    for n in 0..DEMO_NOTES {
        let note = Note {
            id: 0,
            title: format!("Note {}", n + 1),
            body: format!("Body of demo note {}", n + 1),
            category_id: categories[n % categories.len()].id,
        };
        NoteRepo::save(&mut tx, &note).await?;
    }

    tx.commit().await?;
    tracing::info!(
        categories = DEMO_CATEGORIES,
        notes = DEMO_NOTES,
        "Seeded demo data"
    );
    Ok(true)
}
