//! The error boundary: maps domain errors onto HTTP responses.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

use crate::common::{PageError, PostError, StoreError};
use crate::web::helpers::not_found_response;

fn internal_error() -> HttpResponse {
    HttpResponse::InternalServerError()
        .content_type("text/plain; charset=utf-8")
        .body("Something went wrong. Please try again later.")
}

impl ResponseError for StoreError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        log::error!("Store failure: {self}");
        internal_error()
    }
}

impl ResponseError for PageError {
    fn status_code(&self) -> StatusCode {
        match self {
            PageError::NotFound(_) => StatusCode::NOT_FOUND,
            PageError::Store(e) => e.status_code(),
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            PageError::NotFound(iden) => {
                log::debug!("Community with {iden} not found");
                not_found_response()
            }
            PageError::Store(e) => e.error_response(),
        }
    }
}

impl ResponseError for PostError {
    fn status_code(&self) -> StatusCode {
        match self {
            PostError::TitleTooShort(_) | PostError::TitleTooLong(_) => StatusCode::BAD_REQUEST,
            PostError::CommunityNotFound(_) => StatusCode::NOT_FOUND,
            PostError::Store(e) => e.status_code(),
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            PostError::Store(e) => e.error_response(),
            other => HttpResponse::build(other.status_code())
                .content_type("text/plain; charset=utf-8")
                .body(other.to_string()),
        }
    }
}
