use notebook_core::types::DbId;
use notebook_core::validation::{FieldSpec, ValidatedInput};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `notes` table.
///
/// An `id` of `0` marks a record that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Note {
    pub id: DbId,
    pub title: String,
    pub body: String,
    pub category_id: DbId,
}

/// Read projection of a note joined with its category's name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct NoteView {
    pub id: DbId,
    pub title: String,
    pub body: String,
    pub category: String,
}

/// Request body for creating or replacing a note.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct NoteInput {
    #[serde(default)]
    #[validate(
        custom(function = "notebook_core::validation::required_text"),
        length(min = 2, max = 100)
    )]
    pub title: String,

    #[serde(default)]
    #[validate(
        custom(function = "notebook_core::validation::required_text"),
        length(min = 2, max = 255)
    )]
    pub body: String,

    #[serde(default)]
    #[validate(
        custom(function = "notebook_core::validation::required_id"),
        range(min = 0)
    )]
    pub id_category: DbId,
}

impl NoteInput {
    /// Build the row to persist; `id` is `0` for inserts.
    pub fn into_note(self, id: DbId) -> Note {
        Note {
            id,
            title: self.title,
            body: self.body,
            category_id: self.id_category,
        }
    }
}

impl ValidatedInput for NoteInput {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec {
            key: "title",
            label: "Title",
        },
        FieldSpec {
            key: "body",
            label: "Body",
        },
        FieldSpec {
            key: "id_category",
            label: "CategoryId",
        },
    ];
}
