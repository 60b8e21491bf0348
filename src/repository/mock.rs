use mockall::mock;

use super::{FlashcardReader, FlashcardWriter, TagReader, TagWriter};
use crate::domain::{
    flashcard::{Flashcard, FlashcardListQuery, NewFlashcard, UpdateFlashcard},
    tag::{NewTag, Tag, UpdateTag},
};
use crate::repository::RepositoryResult;

mock! {
    pub FlashcardReader {}

    impl FlashcardReader for FlashcardReader {
        fn list_flashcards(&self, query: FlashcardListQuery) -> RepositoryResult<Vec<Flashcard>>;
        fn get_flashcard_by_id(&self, id: i32) -> RepositoryResult<Option<Flashcard>>;
    }
}

mock! {
    pub FlashcardWriter {}

    impl FlashcardWriter for FlashcardWriter {
        fn create_flashcard(&self, new_flashcard: &NewFlashcard) -> RepositoryResult<Flashcard>;
        fn update_flashcard(&self, flashcard_id: i32, updates: &UpdateFlashcard) -> RepositoryResult<Flashcard>;
        fn delete_flashcard(&self, flashcard_id: i32) -> RepositoryResult<Flashcard>;
        fn delete_all_flashcards(&self) -> RepositoryResult<Vec<Flashcard>>;
    }
}

mock! {
    pub TagReader {}

    impl TagReader for TagReader {
        fn list_tags(&self) -> RepositoryResult<Vec<Tag>>;
        fn get_tag_by_id(&self, id: i32) -> RepositoryResult<Option<Tag>>;
    }
}

mock! {
    pub TagWriter {}

    impl TagWriter for TagWriter {
        fn create_tag(&self, new_tag: &NewTag) -> RepositoryResult<Tag>;
        fn update_tag(&self, tag_id: i32, updates: &UpdateTag) -> RepositoryResult<Tag>;
        fn delete_tag(&self, tag_id: i32) -> RepositoryResult<Tag>;
    }
}
