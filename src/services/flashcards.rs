use serde::{Deserialize, Serialize};

use crate::domain::flashcard::{Flashcard, FlashcardListQuery};
use crate::forms::flashcards::{AddFlashcardForm, EditFlashcardForm};
use crate::repository::{FlashcardReader, FlashcardWriter};
use crate::services::{ServiceError, ServiceResult};

/// Query parameters accepted by the search endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    /// Optional substring matched against front and back.
    pub q: Option<String>,
    /// Tag identifiers; a flashcard matches when it carries any of them.
    #[serde(default)]
    pub tags: Vec<i32>,
}

/// Response body of the bulk delete endpoint.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct DeletedFlashcards {
    pub message: String,
    pub count: usize,
}

/// Returns every flashcard, newest first.
pub fn list_flashcards<R>(repo: &R) -> ServiceResult<Vec<Flashcard>>
where
    R: FlashcardReader + ?Sized,
{
    repo.list_flashcards(FlashcardListQuery::new())
        .map_err(ServiceError::from)
}

/// Filters flashcards by text and tag membership, newest first.
pub fn search_flashcards<R>(repo: &R, query: SearchQuery) -> ServiceResult<Vec<Flashcard>>
where
    R: FlashcardReader + ?Sized,
{
    let SearchQuery { q, tags } = query;

    let mut list_query = FlashcardListQuery::new();

    if let Some(term) = q {
        list_query = list_query.search(term);
    }

    if !tags.is_empty() {
        list_query = list_query.tags(tags);
    }

    repo.list_flashcards(list_query).map_err(ServiceError::from)
}

/// Fetches a single flashcard with its tags.
pub fn get_flashcard<R>(repo: &R, flashcard_id: i32) -> ServiceResult<Flashcard>
where
    R: FlashcardReader + ?Sized,
{
    repo.get_flashcard_by_id(flashcard_id)?
        .ok_or(ServiceError::NotFound)
}

/// Validates the payload and stores a new flashcard with its tag links.
pub fn create_flashcard<R>(repo: &R, form: AddFlashcardForm) -> ServiceResult<Flashcard>
where
    R: FlashcardWriter + ?Sized,
{
    let new_flashcard = form.into_new_flashcard()?;

    repo.create_flashcard(&new_flashcard)
        .map_err(ServiceError::from)
}

/// Validates the patch and applies it to an existing flashcard.
pub fn modify_flashcard<R>(
    repo: &R,
    flashcard_id: i32,
    form: EditFlashcardForm,
) -> ServiceResult<Flashcard>
where
    R: FlashcardWriter + ?Sized,
{
    let update = form.into_update_flashcard()?;

    repo.update_flashcard(flashcard_id, &update)
        .map_err(ServiceError::from)
}

/// Deletes a flashcard and returns the removed record.
pub fn remove_flashcard<R>(repo: &R, flashcard_id: i32) -> ServiceResult<Flashcard>
where
    R: FlashcardWriter + ?Sized,
{
    repo.delete_flashcard(flashcard_id)
        .map_err(ServiceError::from)
}

/// Deletes every flashcard and reports how many were removed.
pub fn remove_all_flashcards<R>(repo: &R) -> ServiceResult<DeletedFlashcards>
where
    R: FlashcardWriter + ?Sized,
{
    let deleted = repo.delete_all_flashcards().map_err(ServiceError::from)?;
    let count = deleted.len();

    Ok(DeletedFlashcards {
        message: format!("Deleted {count} flashcards successfully"),
        count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    use crate::domain::tag::Tag;
    use crate::repository::RepositoryError;
    use crate::repository::mock::{MockFlashcardReader, MockFlashcardWriter};

    fn fixed_datetime() -> NaiveDateTime {
        match NaiveDate::from_ymd_opt(2024, 1, 1) {
            Some(date) => date.and_hms_opt(0, 0, 0).unwrap_or_default(),
            None => NaiveDateTime::default(),
        }
    }

    fn sample_flashcard(id: i32, front: &str, tags: &[(i32, &str)]) -> Flashcard {
        Flashcard {
            id,
            front: front.to_string(),
            back: "answer".to_string(),
            created_at: fixed_datetime(),
            updated_at: fixed_datetime(),
            tags: tags
                .iter()
                .map(|(id, name)| Tag {
                    id: *id,
                    name: name.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn list_flashcards_uses_unfiltered_query() {
        let mut repo = MockFlashcardReader::new();

        repo.expect_list_flashcards()
            .times(1)
            .withf(|query| query.search.is_none() && query.tag_ids.is_none())
            .returning(|_| Ok(vec![sample_flashcard(1, "Q", &[])]));

        let cards = list_flashcards(&repo).expect("expected success");

        assert_eq!(cards.len(), 1);
    }

    #[test]
    fn search_passes_text_and_tags() {
        let mut repo = MockFlashcardReader::new();

        repo.expect_list_flashcards()
            .times(1)
            .withf(|query| {
                assert_eq!(query.search.as_deref(), Some("foo"));
                assert_eq!(query.tag_ids.as_deref(), Some(&[3, 4][..]));
                true
            })
            .returning(|_| Ok(vec![sample_flashcard(2, "foo", &[(3, "rust")])]));

        let query = SearchQuery {
            q: Some("foo".to_string()),
            tags: vec![3, 4],
        };

        let cards = search_flashcards(&repo, query).expect("expected success");

        assert_eq!(cards[0].tag_ids(), vec![3]);
    }

    #[test]
    fn search_without_tags_leaves_tag_filter_unset() {
        let mut repo = MockFlashcardReader::new();

        repo.expect_list_flashcards()
            .times(1)
            .withf(|query| query.tag_ids.is_none())
            .returning(|_| Ok(Vec::new()));

        let result = search_flashcards(&repo, SearchQuery::default());

        assert!(matches!(result, Ok(cards) if cards.is_empty()));
    }

    #[test]
    fn get_flashcard_maps_missing_to_not_found() {
        let mut repo = MockFlashcardReader::new();

        repo.expect_get_flashcard_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let result = get_flashcard(&repo, 42);

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[test]
    fn store_failures_become_internal_errors() {
        let mut repo = MockFlashcardReader::new();

        repo.expect_list_flashcards().times(1).returning(|_| {
            Err(RepositoryError::Database(
                diesel::result::Error::RollbackTransaction,
            ))
        });

        let result = list_flashcards(&repo);

        assert!(matches!(result, Err(ServiceError::Internal(_))));
    }

    #[test]
    fn create_flashcard_validates_and_persists() {
        let mut repo = MockFlashcardWriter::new();

        repo.expect_create_flashcard()
            .times(1)
            .withf(|new_flashcard| {
                assert_eq!(new_flashcard.front, "Borrow checker?");
                assert_eq!(new_flashcard.back, "Enforces aliasing rules");
                assert_eq!(new_flashcard.tag_ids, vec![1, 2]);
                true
            })
            .returning(|_| {
                Ok(sample_flashcard(
                    7,
                    "Borrow checker?",
                    &[(1, "rust"), (2, "memory")],
                ))
            });

        let form = AddFlashcardForm {
            front: Some(" Borrow checker? ".to_string()),
            back: Some("Enforces aliasing rules".to_string()),
            tag_ids: Some(vec![1, 2]),
        };

        let created = create_flashcard(&repo, form).expect("expected success");

        assert_eq!(created.id, 7);
        assert_eq!(created.tags.len(), 2);
    }

    #[test]
    fn create_flashcard_missing_front_never_reaches_store() {
        let repo = MockFlashcardWriter::new();
        let form = AddFlashcardForm {
            front: None,
            back: Some("answer".to_string()),
            tag_ids: None,
        };

        let result = create_flashcard(&repo, form);

        match result {
            Err(ServiceError::Validation(violations)) => {
                assert!(violations.iter().any(|v| v.field == "front"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn modify_flashcard_forwards_tag_replacement() {
        let mut repo = MockFlashcardWriter::new();

        repo.expect_update_flashcard()
            .times(1)
            .withf(|flashcard_id, updates| {
                assert_eq!(*flashcard_id, 5);
                assert_eq!(updates.front, None);
                assert_eq!(updates.tag_ids, Some(Vec::new()));
                true
            })
            .returning(|_, _| Ok(sample_flashcard(5, "Q", &[])));

        let form = EditFlashcardForm {
            tag_ids: Some(Vec::new()),
            ..Default::default()
        };

        let updated = modify_flashcard(&repo, 5, form).expect("expected success");

        assert!(updated.tags.is_empty());
    }

    #[test]
    fn modify_flashcard_reports_not_found() {
        let mut repo = MockFlashcardWriter::new();

        repo.expect_update_flashcard()
            .times(1)
            .returning(|_, _| Err(RepositoryError::NotFound));

        let form = EditFlashcardForm {
            front: Some("new".to_string()),
            ..Default::default()
        };

        let result = modify_flashcard(&repo, 99, form);

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[test]
    fn remove_flashcard_reports_not_found() {
        let mut repo = MockFlashcardWriter::new();

        repo.expect_delete_flashcard()
            .times(1)
            .withf(|flashcard_id| *flashcard_id == 3)
            .returning(|_| Err(RepositoryError::NotFound));

        let result = remove_flashcard(&repo, 3);

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[test]
    fn remove_all_flashcards_counts_deleted_rows() {
        let mut repo = MockFlashcardWriter::new();

        repo.expect_delete_all_flashcards().times(1).returning(|| {
            Ok(vec![
                sample_flashcard(1, "a", &[]),
                sample_flashcard(2, "b", &[]),
                sample_flashcard(3, "c", &[]),
            ])
        });

        let deleted = remove_all_flashcards(&repo).expect("expected success");

        assert_eq!(
            deleted,
            DeletedFlashcards {
                message: "Deleted 3 flashcards successfully".to_string(),
                count: 3,
            }
        );
    }
}
