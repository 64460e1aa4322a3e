use crate::store::StoreError;
use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError};
use askama_actix::Template;
use thiserror::Error;

#[derive(Template)]
#[template(path = "404.html")]
struct NotFoundHtml;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Plant not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Store(_) | AppError::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::NotFound(_) => match NotFoundHtml.render() {
                Ok(body) => HttpResponse::NotFound()
                    .content_type(ContentType::html())
                    .body(body),
                Err(e) => {
                    tracing::error!(error = %e, "Failed to render 404 page");
                    HttpResponse::NotFound().finish()
                }
            },
            AppError::BadRequest(m) => HttpResponse::BadRequest().body(m.clone()),
            AppError::Store(_) | AppError::Template(_) => {
                tracing::error!(application_error = %self, "Responding with internal server error");
                HttpResponse::InternalServerError().body("Internal Server Error")
            }
        }
    }
}
