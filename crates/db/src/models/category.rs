use notebook_core::types::DbId;
use notebook_core::validation::{FieldSpec, ValidatedInput};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `categories` table.
///
/// An `id` of `0` marks a record that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub id: DbId,
    pub name: String,
}

/// Request body for creating or replacing a category.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CategoryInput {
    #[serde(default)]
    #[validate(
        custom(function = "notebook_core::validation::required_text"),
        length(min = 2, max = 100)
    )]
    pub name: String,
}

impl ValidatedInput for CategoryInput {
    const FIELDS: &'static [FieldSpec] = &[FieldSpec {
        key: "name",
        label: "Name",
    }];
}
