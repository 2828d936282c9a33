//! Error handling for the quiz API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use quiz_core::QuizError;
use serde::Serialize;
use thiserror::Error;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Quiz(#[from] QuizError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl ApiError {
    fn status_and_kind(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Quiz(e) => match e {
                QuizError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
                QuizError::OutOfRange { .. } => (StatusCode::NOT_FOUND, "out_of_range"),
                QuizError::DuplicateCategory(_) => (StatusCode::CONFLICT, "duplicate_category"),
                QuizError::NoCategorySelected => (StatusCode::CONFLICT, "no_category_selected"),
                QuizError::NoActiveQuestion => (StatusCode::CONFLICT, "no_active_question"),
                QuizError::InvalidItem(_) => (StatusCode::BAD_REQUEST, "invalid_item"),
                QuizError::InsufficientDistractors(_) => {
                    (StatusCode::UNPROCESSABLE_ENTITY, "insufficient_distractors")
                }
                QuizError::DataSource(_) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, "data_source_error")
                }
            },
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = self.status_and_kind();
        if status.is_server_error() {
            tracing::error!("{}", self);
        }

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}

/// Result type alias for API operations
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_status() {
        let error = ApiError::from(QuizError::NotFound("Verbs".to_string()));
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_out_of_range_status() {
        let error = ApiError::from(QuizError::OutOfRange {
            category: "Verbs".to_string(),
            index: 4,
        });
        assert_eq!(error.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_duplicate_category_status() {
        let error = ApiError::from(QuizError::DuplicateCategory("Verbs".to_string()));
        assert_eq!(error.into_response().status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_no_category_selected_status() {
        let error = ApiError::from(QuizError::NoCategorySelected);
        assert_eq!(error.into_response().status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_invalid_item_status() {
        let error = ApiError::from(QuizError::InvalidItem("meaning must not be empty".into()));
        assert_eq!(error.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_insufficient_distractors_status() {
        let error = ApiError::from(QuizError::InsufficientDistractors("犬".to_string()));
        assert_eq!(
            error.into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn test_internal_error_status() {
        let error = ApiError::Internal("session lock poisoned".to_string());
        assert_eq!(
            error.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_display_passes_quiz_message_through() {
        let error = ApiError::from(QuizError::NotFound("Verbs".to_string()));
        assert_eq!(error.to_string(), "category not found: Verbs");
    }

    #[test]
    fn test_error_display_bad_request() {
        let error = ApiError::BadRequest("missing field".to_string());
        assert_eq!(error.to_string(), "Bad request: missing field");
    }
}
