use serde::Deserialize;
use validator::Validate;

use crate::domain::flashcard::{NewFlashcard, UpdateFlashcard};
use crate::forms::{FormResult, validate_not_blank, validate_tag_ids};

/// Maximum allowed length for either side of a flashcard.
const TEXT_MAX_LEN: usize = 4096;
const TEXT_MAX_LEN_VALIDATOR: u64 = TEXT_MAX_LEN as u64;

/// Body of `POST /flashcards`.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct AddFlashcardForm {
    #[validate(
        required,
        length(min = 1, max = TEXT_MAX_LEN_VALIDATOR),
        custom(function = "validate_not_blank")
    )]
    pub front: Option<String>,
    #[validate(
        required,
        length(min = 1, max = TEXT_MAX_LEN_VALIDATOR),
        custom(function = "validate_not_blank")
    )]
    pub back: Option<String>,
    /// Tags to link to the new flashcard; absent or `null` links none.
    #[serde(default, rename = "tagIds")]
    #[validate(custom(function = "validate_tag_ids"))]
    pub tag_ids: Option<Vec<i32>>,
}

impl AddFlashcardForm {
    /// Validates and trims the payload into a domain `NewFlashcard`.
    pub fn into_new_flashcard(self) -> FormResult<NewFlashcard> {
        self.validate()?;

        let front = self.front.unwrap_or_default().trim().to_string();
        let back = self.back.unwrap_or_default().trim().to_string();

        Ok(NewFlashcard::new(front, back).with_tag_ids(self.tag_ids.unwrap_or_default()))
    }
}

/// Body of `PUT /flashcards/{id}`. Every field is optional; a present
/// `tagIds` replaces the existing links, an absent one leaves them alone.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct EditFlashcardForm {
    #[validate(
        length(min = 1, max = TEXT_MAX_LEN_VALIDATOR),
        custom(function = "validate_not_blank")
    )]
    pub front: Option<String>,
    #[validate(
        length(min = 1, max = TEXT_MAX_LEN_VALIDATOR),
        custom(function = "validate_not_blank")
    )]
    pub back: Option<String>,
    #[serde(default, rename = "tagIds")]
    #[validate(custom(function = "validate_tag_ids"))]
    pub tag_ids: Option<Vec<i32>>,
}

impl EditFlashcardForm {
    /// Validates and trims the payload into a domain `UpdateFlashcard`.
    pub fn into_update_flashcard(self) -> FormResult<UpdateFlashcard> {
        self.validate()?;

        let mut update = UpdateFlashcard::new();

        if let Some(front) = self.front {
            update = update.front(front.trim());
        }

        if let Some(back) = self.back {
            update = update.back(back.trim());
        }

        if let Some(tag_ids) = self.tag_ids {
            update = update.tag_ids(tag_ids);
        }

        Ok(update)
    }
}
