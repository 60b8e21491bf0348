use actix_web::{HttpResponse, error::InternalError, web};
use serde::Serialize;

use crate::forms::FieldViolation;

pub mod flashcards;
pub mod tags;

/// Body returned for not-found and internal failures.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// Body returned when a payload fails validation.
#[derive(Debug, Serialize)]
struct ViolationsBody {
    errors: Vec<FieldViolation>,
}

/// Register every API handler. Mounted under `/api` by the server.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(flashcards::show_flashcards)
        // Must precede `/flashcards/{id}`.
        .service(flashcards::find_flashcards)
        .service(flashcards::show_flashcard)
        .service(flashcards::add_flashcard)
        .service(flashcards::edit_flashcard)
        .service(flashcards::delete_flashcard)
        .service(flashcards::delete_all_flashcards)
        .service(tags::show_tags)
        .service(tags::show_tag)
        .service(tags::add_tag)
        .service(tags::edit_tag)
        .service(tags::delete_tag);
}

/// JSON extractor settings: malformed bodies become a 400 with a single
/// violation on `body` instead of actix's plain-text error.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = validation_failed(vec![FieldViolation::new(
            "body",
            "invalid_json",
            err.to_string(),
        )]);
        InternalError::from_response(err, response).into()
    })
}

fn validation_failed(violations: Vec<FieldViolation>) -> HttpResponse {
    HttpResponse::BadRequest().json(ViolationsBody { errors: violations })
}

fn not_found(message: &str) -> HttpResponse {
    HttpResponse::NotFound().json(ErrorBody {
        error: message.to_string(),
    })
}

fn internal_error(message: &str) -> HttpResponse {
    HttpResponse::InternalServerError().json(ErrorBody {
        error: message.to_string(),
    })
}
