use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::forms::tags::{AddTagForm, EditTagForm};
use crate::repository::DieselRepository;
use crate::routes::{internal_error, not_found, validation_failed};
use crate::services::ServiceError;
use crate::services::tags::{create_tag, get_tag, load_tags, modify_tag, remove_tag};

#[get("/tags")]
pub async fn show_tags(repo: web::Data<DieselRepository>) -> impl Responder {
    match load_tags(repo.get_ref()) {
        Ok(tags) => HttpResponse::Ok().json(tags),
        Err(err) => {
            log::error!("Failed to list tags: {err}");
            internal_error("Failed to retrieve tags")
        }
    }
}

#[get("/tags/{tag_id}")]
pub async fn show_tag(path: web::Path<i32>, repo: web::Data<DieselRepository>) -> impl Responder {
    let tag_id = path.into_inner();

    match get_tag(repo.get_ref(), tag_id) {
        Ok(tag) => HttpResponse::Ok().json(tag),
        Err(ServiceError::NotFound) => not_found("Tag not found"),
        Err(err) => {
            log::error!("Failed to get tag {tag_id}: {err}");
            internal_error("Failed to retrieve tag")
        }
    }
}

#[post("/tags")]
pub async fn add_tag(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<AddTagForm>,
) -> impl Responder {
    match create_tag(repo.get_ref(), form) {
        Ok(tag) => HttpResponse::Created().json(tag),
        Err(ServiceError::Validation(violations)) => validation_failed(violations),
        Err(err) => {
            log::error!("Failed to create tag: {err}");
            internal_error("Failed to create tag")
        }
    }
}

#[put("/tags/{tag_id}")]
pub async fn edit_tag(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<EditTagForm>,
) -> impl Responder {
    let tag_id = path.into_inner();

    match modify_tag(repo.get_ref(), tag_id, form) {
        Ok(tag) => HttpResponse::Ok().json(tag),
        Err(ServiceError::Validation(violations)) => validation_failed(violations),
        Err(ServiceError::NotFound) => not_found("Tag not found"),
        Err(err) => {
            log::error!("Failed to update tag {tag_id}: {err}");
            internal_error("Failed to update tag")
        }
    }
}

#[delete("/tags/{tag_id}")]
pub async fn delete_tag(path: web::Path<i32>, repo: web::Data<DieselRepository>) -> impl Responder {
    let tag_id = path.into_inner();

    match remove_tag(repo.get_ref(), tag_id) {
        Ok(tag) => HttpResponse::Ok().json(tag),
        Err(ServiceError::NotFound) => not_found("Tag not found"),
        Err(err) => {
            log::error!("Failed to delete tag {tag_id}: {err}");
            internal_error("Failed to delete tag")
        }
    }
}
