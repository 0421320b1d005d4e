//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&mut PgConnection` as the first argument, so callers can
//! pass either a pooled connection or an open transaction.

pub mod category_repo;
pub mod note_repo;

pub use category_repo::CategoryRepo;
pub use note_repo::NoteRepo;
