use diesel::prelude::*;

/// Join row linking one flashcard to one tag.
#[derive(Debug, Clone, Copy, Insertable)]
#[diesel(table_name = crate::schema::flashcard_tags)]
pub struct FlashcardTag {
    pub flashcard_id: i32,
    pub tag_id: i32,
}

impl FlashcardTag {
    pub fn new(flashcard_id: i32, tag_id: i32) -> Self {
        Self {
            flashcard_id,
            tag_id,
        }
    }

    /// Build one join row per tag for `flashcard_id`.
    pub fn for_flashcard(flashcard_id: i32, tag_ids: &[i32]) -> Vec<Self> {
        tag_ids
            .iter()
            .map(|tag_id| Self::new(flashcard_id, *tag_id))
            .collect()
    }
}
