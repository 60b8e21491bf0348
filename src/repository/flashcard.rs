use std::collections::HashMap;

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::{
    db::unicode_lower,
    domain::flashcard::{
        Flashcard as DomainFlashcard, FlashcardListQuery, NewFlashcard as DomainNewFlashcard,
        UpdateFlashcard as DomainUpdateFlashcard,
    },
    domain::tag::Tag as DomainTag,
    models::flashcard::{
        Flashcard as DbFlashcard, NewFlashcard as DbNewFlashcard,
        UpdateFlashcard as DbUpdateFlashcard,
    },
    models::flashcard_tag::FlashcardTag as DbFlashcardTag,
    models::tag::Tag as DbTag,
    repository::{
        DieselRepository, FlashcardReader, FlashcardWriter, RepositoryError, RepositoryResult,
    },
};

impl FlashcardReader for DieselRepository {
    fn list_flashcards(
        &self,
        query: FlashcardListQuery,
    ) -> RepositoryResult<Vec<DomainFlashcard>> {
        use crate::schema::{flashcard_tags, flashcards};

        let mut conn = self.conn()?;

        let mut items = flashcards::table.into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(tag_ids) = query.tag_filter() {
            let flashcard_ids = flashcard_tags::table
                .filter(flashcard_tags::tag_id.eq_any(tag_ids))
                .select(flashcard_tags::flashcard_id)
                .distinct()
                .load::<i32>(&mut conn)?;

            if flashcard_ids.is_empty() {
                return Ok(Vec::new());
            }

            items = items.filter(flashcards::id.eq_any(flashcard_ids));
        }

        // Both sides are lowercased so the match ignores case beyond ASCII.
        if let Some(term) = query.search_term() {
            let pattern = format!("%{}%", term.to_lowercase());
            items = items.filter(
                unicode_lower(flashcards::front)
                    .like(pattern.clone())
                    .or(unicode_lower(flashcards::back).like(pattern)),
            );
        }

        items = items.order((flashcards::created_at.desc(), flashcards::id.desc()));

        let db_flashcards = items.load::<DbFlashcard>(&mut conn)?;

        attach_tags(&mut conn, db_flashcards)
    }

    fn get_flashcard_by_id(&self, id: i32) -> RepositoryResult<Option<DomainFlashcard>> {
        let mut conn = self.conn()?;
        load_flashcard(&mut conn, id)
    }
}

impl FlashcardWriter for DieselRepository {
    fn create_flashcard(
        &self,
        new_flashcard: &DomainNewFlashcard,
    ) -> RepositoryResult<DomainFlashcard> {
        use crate::schema::flashcards;

        let mut conn = self.conn()?;
        let db_new = DbNewFlashcard::from(new_flashcard);

        // An unknown tag id rolls back the flashcard row as well.
        conn.transaction::<DomainFlashcard, RepositoryError, _>(|conn| {
            let created = diesel::insert_into(flashcards::table)
                .values(&db_new)
                .get_result::<DbFlashcard>(conn)?;

            insert_tag_links(conn, created.id, &new_flashcard.tag_ids)?;

            load_flashcard(conn, created.id)?.ok_or(RepositoryError::NotFound)
        })
    }

    fn update_flashcard(
        &self,
        flashcard_id: i32,
        updates: &DomainUpdateFlashcard,
    ) -> RepositoryResult<DomainFlashcard> {
        use crate::schema::{flashcard_tags, flashcards};

        let mut conn = self.conn()?;
        let db_updates = DbUpdateFlashcard::from(updates);

        let updated = diesel::update(flashcards::table.filter(flashcards::id.eq(flashcard_id)))
            .set(&db_updates)
            .get_result::<DbFlashcard>(&mut conn)?;

        if let Some(tag_ids) = updates.tag_ids.as_ref() {
            // Not wrapped in a transaction: if the insert fails after the
            // delete succeeded, the flashcard is left with no tags.
            diesel::delete(
                flashcard_tags::table.filter(flashcard_tags::flashcard_id.eq(updated.id)),
            )
            .execute(&mut conn)?;

            insert_tag_links(&mut conn, updated.id, tag_ids)?;
        }

        load_flashcard(&mut conn, updated.id)?.ok_or(RepositoryError::NotFound)
    }

    fn delete_flashcard(&self, flashcard_id: i32) -> RepositoryResult<DomainFlashcard> {
        use crate::schema::flashcards;

        let mut conn = self.conn()?;

        let mut tags = load_tags_for_flashcards(&mut conn, &[flashcard_id])?;

        let deleted = diesel::delete(flashcards::table.filter(flashcards::id.eq(flashcard_id)))
            .get_result::<DbFlashcard>(&mut conn)?;

        let tags = tags.remove(&deleted.id).unwrap_or_default();
        Ok(deleted.with_tags(tags))
    }

    fn delete_all_flashcards(&self) -> RepositoryResult<Vec<DomainFlashcard>> {
        use crate::schema::{flashcard_tags, flashcards};

        let mut conn = self.conn()?;

        let linked_ids = flashcard_tags::table
            .select(flashcard_tags::flashcard_id)
            .distinct()
            .load::<i32>(&mut conn)?;
        let mut tags = load_tags_for_flashcards(&mut conn, &linked_ids)?;

        let deleted = diesel::delete(flashcards::table).get_results::<DbFlashcard>(&mut conn)?;

        Ok(deleted
            .into_iter()
            .map(|row| {
                let row_tags = tags.remove(&row.id).unwrap_or_default();
                row.with_tags(row_tags)
            })
            .collect())
    }
}

fn load_flashcard(
    conn: &mut SqliteConnection,
    flashcard_id: i32,
) -> RepositoryResult<Option<DomainFlashcard>> {
    use crate::schema::flashcards;

    let flashcard = flashcards::table
        .filter(flashcards::id.eq(flashcard_id))
        .first::<DbFlashcard>(conn)
        .optional()?;

    match flashcard {
        Some(db_flashcard) => Ok(attach_tags(conn, vec![db_flashcard])?.pop()),
        None => Ok(None),
    }
}

fn attach_tags(
    conn: &mut SqliteConnection,
    db_flashcards: Vec<DbFlashcard>,
) -> RepositoryResult<Vec<DomainFlashcard>> {
    if db_flashcards.is_empty() {
        return Ok(Vec::new());
    }

    let flashcard_ids: Vec<i32> = db_flashcards.iter().map(|flashcard| flashcard.id).collect();
    let mut tag_map = load_tags_for_flashcards(conn, &flashcard_ids)?;

    Ok(db_flashcards
        .into_iter()
        .map(|db_flashcard| {
            let tags = tag_map.remove(&db_flashcard.id).unwrap_or_default();
            db_flashcard.with_tags(tags)
        })
        .collect())
}

fn load_tags_for_flashcards(
    conn: &mut SqliteConnection,
    flashcard_ids: &[i32],
) -> RepositoryResult<HashMap<i32, Vec<DomainTag>>> {
    use crate::schema::{flashcard_tags, tags};

    if flashcard_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = flashcard_tags::table
        .inner_join(tags::table)
        .filter(flashcard_tags::flashcard_id.eq_any(flashcard_ids))
        .order((tags::name.asc(), tags::id.asc()))
        .select((flashcard_tags::flashcard_id, DbTag::as_select()))
        .load::<(i32, DbTag)>(conn)?;

    let mut map: HashMap<i32, Vec<DomainTag>> = HashMap::new();
    for (flashcard_id, tag) in rows {
        map.entry(flashcard_id).or_default().push(tag.into());
    }

    Ok(map)
}

fn insert_tag_links(
    conn: &mut SqliteConnection,
    flashcard_id: i32,
    tag_ids: &[i32],
) -> RepositoryResult<()> {
    use crate::schema::flashcard_tags;

    if tag_ids.is_empty() {
        return Ok(());
    }

    let links = DbFlashcardTag::for_flashcard(flashcard_id, tag_ids);
    diesel::insert_into(flashcard_tags::table)
        .values(&links)
        .execute(conn)?;

    Ok(())
}
