use actix_web::HttpResponse;
use serde::Serialize;

use crate::services::ServiceError;

pub mod recipes;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Map a service error to its HTTP response with a JSON error body.
pub fn error_response(err: ServiceError) -> HttpResponse {
    let body = ErrorBody {
        error: err.to_string(),
    };
    match err {
        ServiceError::Validation(_) => HttpResponse::BadRequest().json(body),
        ServiceError::NotFound => HttpResponse::NotFound().json(body),
        ServiceError::Conflict => HttpResponse::Conflict().json(body),
        ServiceError::Persistence | ServiceError::Internal => {
            HttpResponse::InternalServerError().json(body)
        }
    }
}
