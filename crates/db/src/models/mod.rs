//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` request DTO shared by create and update
//!   (updates replace every mutable field)

pub mod category;
pub mod note;
