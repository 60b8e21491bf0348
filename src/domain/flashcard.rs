use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::tag::Tag;

/// Domain representation of a flashcard together with its flattened tags.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Flashcard {
    /// Unique identifier of the flashcard.
    pub id: i32,
    /// Prompt shown on the front side.
    pub front: String,
    /// Answer shown on the back side.
    pub back: String,
    /// Timestamp for when the flashcard was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the flashcard.
    pub updated_at: NaiveDateTime,
    /// Tags linked to the flashcard, ordered by name.
    pub tags: Vec<Tag>,
}

impl Flashcard {
    /// Identifiers of the linked tags.
    pub fn tag_ids(&self) -> Vec<i32> {
        self.tags.iter().map(|tag| tag.id).collect()
    }
}

/// Payload required to insert a new flashcard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFlashcard {
    pub front: String,
    pub back: String,
    /// Tags to link right after the insert.
    pub tag_ids: Vec<i32>,
    /// Timestamp captured when the payload was created.
    pub created_at: NaiveDateTime,
}

impl NewFlashcard {
    /// Build a new flashcard payload stamped with the current time.
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
            tag_ids: Vec::new(),
            created_at: chrono::Utc::now().naive_utc(),
        }
    }

    /// Attach tags to the payload. Duplicate identifiers are collapsed.
    pub fn with_tag_ids(mut self, tag_ids: impl IntoIterator<Item = i32>) -> Self {
        self.tag_ids = dedup_tag_ids(tag_ids);
        self
    }
}

/// Patch data applied when updating an existing flashcard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateFlashcard {
    /// Optional front update.
    pub front: Option<String>,
    /// Optional back update.
    pub back: Option<String>,
    /// Replacement tag set. `None` leaves links untouched, `Some(vec![])` clears them.
    pub tag_ids: Option<Vec<i32>>,
    /// Timestamp captured when the patch was created.
    pub updated_at: NaiveDateTime,
}

impl Default for UpdateFlashcard {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdateFlashcard {
    /// Create a new patch object with no changes applied yet.
    pub fn new() -> Self {
        Self {
            front: None,
            back: None,
            tag_ids: None,
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }

    /// Update the front text.
    pub fn front(mut self, front: impl Into<String>) -> Self {
        self.front = Some(front.into());
        self
    }

    /// Update the back text.
    pub fn back(mut self, back: impl Into<String>) -> Self {
        self.back = Some(back.into());
        self
    }

    /// Replace every tag link with the given set.
    pub fn tag_ids(mut self, tag_ids: impl IntoIterator<Item = i32>) -> Self {
        self.tag_ids = Some(dedup_tag_ids(tag_ids));
        self
    }
}

/// Filter used when listing or searching flashcards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlashcardListQuery {
    /// Case-insensitive substring matched against front or back.
    pub search: Option<String>,
    /// Keep only flashcards linked to at least one of these tags.
    pub tag_ids: Option<Vec<i32>>,
}

impl FlashcardListQuery {
    /// Construct a query that matches every flashcard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter the results by a search term applied to front and back.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Filter the results to flashcards carrying any of `tag_ids`.
    pub fn tags(mut self, tag_ids: impl IntoIterator<Item = i32>) -> Self {
        self.tag_ids = Some(dedup_tag_ids(tag_ids));
        self
    }

    /// Search term with blank input treated as absent.
    pub fn search_term(&self) -> Option<&str> {
        self.search
            .as_deref()
            .filter(|term| !term.trim().is_empty())
    }

    /// Tag filter with an empty list treated as absent.
    pub fn tag_filter(&self) -> Option<&[i32]> {
        self.tag_ids.as_deref().filter(|ids| !ids.is_empty())
    }
}

fn dedup_tag_ids(tag_ids: impl IntoIterator<Item = i32>) -> Vec<i32> {
    let mut ids = Vec::new();
    for id in tag_ids {
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    ids
}
