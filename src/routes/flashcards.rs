use actix_web::{HttpRequest, HttpResponse, Responder, delete, get, post, put, web};

use crate::forms::FieldViolation;
use crate::forms::flashcards::{AddFlashcardForm, EditFlashcardForm};
use crate::repository::DieselRepository;
use crate::routes::{internal_error, not_found, validation_failed};
use crate::services::ServiceError;
use crate::services::flashcards::{self as flashcards_service, SearchQuery};

#[get("/flashcards")]
pub async fn show_flashcards(repo: web::Data<DieselRepository>) -> impl Responder {
    match flashcards_service::list_flashcards(repo.get_ref()) {
        Ok(flashcards) => HttpResponse::Ok().json(flashcards),
        Err(err) => {
            log::error!("Failed to list flashcards: {err}");
            internal_error("Failed to retrieve flashcards")
        }
    }
}

#[get("/flashcards/search")]
/// Search by `q` and any number of repeated `tags` parameters.
pub async fn find_flashcards(
    req: HttpRequest,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    // actix's `web::Query` cannot collect repeated keys into a Vec.
    let query = match serde_html_form::from_str::<SearchQuery>(req.query_string()) {
        Ok(query) => query,
        Err(err) => {
            return validation_failed(vec![FieldViolation::new(
                "tags",
                "invalid_query",
                err.to_string(),
            )]);
        }
    };

    match flashcards_service::search_flashcards(repo.get_ref(), query) {
        Ok(flashcards) => HttpResponse::Ok().json(flashcards),
        Err(err) => {
            log::error!("Failed to search flashcards: {err}");
            internal_error("Failed to search flashcards")
        }
    }
}

#[get("/flashcards/{flashcard_id}")]
pub async fn show_flashcard(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let flashcard_id = path.into_inner();

    match flashcards_service::get_flashcard(repo.get_ref(), flashcard_id) {
        Ok(flashcard) => HttpResponse::Ok().json(flashcard),
        Err(ServiceError::NotFound) => not_found("Flashcard not found"),
        Err(err) => {
            log::error!("Failed to get flashcard {flashcard_id}: {err}");
            internal_error("Failed to retrieve flashcard")
        }
    }
}

#[post("/flashcards")]
pub async fn add_flashcard(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<AddFlashcardForm>,
) -> impl Responder {
    match flashcards_service::create_flashcard(repo.get_ref(), form) {
        Ok(flashcard) => HttpResponse::Created().json(flashcard),
        Err(ServiceError::Validation(violations)) => validation_failed(violations),
        Err(err) => {
            log::error!("Failed to create flashcard: {err}");
            internal_error("Failed to create flashcard")
        }
    }
}

#[put("/flashcards/{flashcard_id}")]
pub async fn edit_flashcard(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<EditFlashcardForm>,
) -> impl Responder {
    let flashcard_id = path.into_inner();

    match flashcards_service::modify_flashcard(repo.get_ref(), flashcard_id, form) {
        Ok(flashcard) => HttpResponse::Ok().json(flashcard),
        Err(ServiceError::Validation(violations)) => validation_failed(violations),
        Err(ServiceError::NotFound) => not_found("Flashcard not found"),
        Err(err) => {
            log::error!("Failed to update flashcard {flashcard_id}: {err}");
            internal_error("Failed to update flashcard")
        }
    }
}

#[delete("/flashcards/{flashcard_id}")]
pub async fn delete_flashcard(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let flashcard_id = path.into_inner();

    match flashcards_service::remove_flashcard(repo.get_ref(), flashcard_id) {
        Ok(flashcard) => HttpResponse::Ok().json(flashcard),
        Err(ServiceError::NotFound) => not_found("Flashcard not found"),
        Err(err) => {
            log::error!("Failed to delete flashcard {flashcard_id}: {err}");
            internal_error("Failed to delete flashcard")
        }
    }
}

#[delete("/flashcards")]
pub async fn delete_all_flashcards(repo: web::Data<DieselRepository>) -> impl Responder {
    match flashcards_service::remove_all_flashcards(repo.get_ref()) {
        Ok(deleted) => {
            log::info!("Deleted {} flashcards", deleted.count);
            HttpResponse::Ok().json(deleted)
        }
        Err(err) => {
            log::error!("Failed to delete all flashcards: {err}");
            internal_error("Failed to delete all flashcards")
        }
    }
}
