use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::flashcard::{
    Flashcard as DomainFlashcard, NewFlashcard as DomainNewFlashcard,
    UpdateFlashcard as DomainUpdateFlashcard,
};
use crate::domain::tag::Tag as DomainTag;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::flashcards)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Flashcard {
    pub id: i32,
    pub front: String,
    pub back: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Flashcard {
    /// Convert the row into its domain form with the given flattened tags.
    pub fn with_tags(self, tags: Vec<DomainTag>) -> DomainFlashcard {
        DomainFlashcard {
            id: self.id,
            front: self.front,
            back: self.back,
            created_at: self.created_at,
            updated_at: self.updated_at,
            tags,
        }
    }
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::flashcards)]
pub struct NewFlashcard<'a> {
    pub front: &'a str,
    pub back: &'a str,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::flashcards)]
pub struct UpdateFlashcard<'a> {
    pub front: Option<&'a str>,
    pub back: Option<&'a str>,
    pub updated_at: NaiveDateTime,
}

impl<'a> From<&'a DomainNewFlashcard> for NewFlashcard<'a> {
    fn from(value: &'a DomainNewFlashcard) -> Self {
        Self {
            front: value.front.as_str(),
            back: value.back.as_str(),
            created_at: value.created_at,
            updated_at: value.created_at,
        }
    }
}

impl<'a> From<&'a DomainUpdateFlashcard> for UpdateFlashcard<'a> {
    fn from(value: &'a DomainUpdateFlashcard) -> Self {
        Self {
            front: value.front.as_deref(),
            back: value.back.as_deref(),
            updated_at: value.updated_at,
        }
    }
}
