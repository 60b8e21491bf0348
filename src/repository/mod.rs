use crate::db::{DbConnection, DbPool};
use crate::domain::flashcard::{Flashcard, FlashcardListQuery, NewFlashcard, UpdateFlashcard};
use crate::domain::tag::{NewTag, Tag, UpdateTag};

pub mod errors;
pub mod flashcard;
pub mod tag;

#[cfg(test)]
pub mod mock;

pub use errors::{RepositoryError, RepositoryResult};

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations over flashcard records.
pub trait FlashcardReader {
    fn list_flashcards(&self, query: FlashcardListQuery) -> RepositoryResult<Vec<Flashcard>>;
    fn get_flashcard_by_id(&self, id: i32) -> RepositoryResult<Option<Flashcard>>;
}

/// Write operations over flashcard records and their tag links.
pub trait FlashcardWriter {
    fn create_flashcard(&self, new_flashcard: &NewFlashcard) -> RepositoryResult<Flashcard>;
    fn update_flashcard(
        &self,
        flashcard_id: i32,
        updates: &UpdateFlashcard,
    ) -> RepositoryResult<Flashcard>;
    fn delete_flashcard(&self, flashcard_id: i32) -> RepositoryResult<Flashcard>;
    fn delete_all_flashcards(&self) -> RepositoryResult<Vec<Flashcard>>;
}

/// Read-only operations over tag records.
pub trait TagReader {
    fn list_tags(&self) -> RepositoryResult<Vec<Tag>>;
    fn get_tag_by_id(&self, id: i32) -> RepositoryResult<Option<Tag>>;
}

/// Write operations over tag records.
pub trait TagWriter {
    fn create_tag(&self, new_tag: &NewTag) -> RepositoryResult<Tag>;
    fn update_tag(&self, tag_id: i32, updates: &UpdateTag) -> RepositoryResult<Tag>;
    fn delete_tag(&self, tag_id: i32) -> RepositoryResult<Tag>;
}
