use aceest_core::{ErrorKind, ValidationError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Custom error types for the workout API
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{}", validation_message(.0))]
    Validation(#[from] ValidationError),

    #[error("Mutex lock error")]
    LockError,
}

/// Client-facing wording for a rejected workout.
fn validation_message(err: &ValidationError) -> &'static str {
    match err.kind() {
        ErrorKind::MissingFields => "Please provide 'workout' and 'duration'",
        ErrorKind::InvalidDuration => "'duration' must be a positive integer",
    }
}

impl<T> From<std::sync::PoisonError<T>> for ApiError {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        ApiError::LockError
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            ApiError::Validation(_) => (StatusCode::BAD_REQUEST, self.to_string()),

            ApiError::LockError => {
                tracing::error!("Lock error: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

/// Helper type for API results
pub type ApiResult<T> = Result<T, ApiError>;
