use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use services::ServiceError;
use validator::ValidationErrors;

use crate::auth::guards::Empty;
use crate::response::ApiResponse;

/// Joins every field-level validation message into one line.
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|errs| {
            errs.iter()
                .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
        })
        .collect::<Vec<_>>()
        .join("; ")
}

pub fn validation_error_response(errors: &ValidationErrors) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::<Empty>::error(format_validation_errors(errors))),
    )
        .into_response()
}

/// Maps a [`ServiceError`] onto a status code and the standard envelope.
pub fn service_error_response(err: ServiceError) -> Response {
    let (status, message) = match &err {
        ServiceError::NotFound(_) => (StatusCode::NOT_FOUND, err.to_string()),
        ServiceError::InvalidCredential(_) | ServiceError::Unauthenticated(_) => {
            (StatusCode::UNAUTHORIZED, err.to_string())
        }
        // Driver and hasher detail stays in the log.
        ServiceError::Hashing(_) | ServiceError::Database(_) => {
            tracing::error!(error = %err, "request failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
        }
    };

    (status, Json(ApiResponse::<Empty>::error(message))).into_response()
}
