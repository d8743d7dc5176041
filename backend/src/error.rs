//! Error handling for the inventory planner
//!
//! Every error renders as `{"error": message}`. Feed failures map to 404,
//! malformed request parameters to 400.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use shared::MonthParseError;
use thiserror::Error;

use crate::feeds::FeedError;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Feed errors
    #[error(transparent)]
    Feed(#[from] FeedError),

    // Validation errors
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl From<MonthParseError> for AppError {
    fn from(err: MonthParseError) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

/// Error response structure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Feed(_) => StatusCode::NOT_FOUND,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::Feed(err) => err.to_string(),
            AppError::ValidationError(msg) => msg.clone(),
        };

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_errors_map_to_not_found() {
        let err = AppError::from(FeedError::NotFound("stock".to_string()));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);

        let err = AppError::from(FeedError::corrupt("catalog", "bad row"));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_month_errors_map_to_bad_request() {
        let err = AppError::from(MonthParseError::OutOfRange(13));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(err.to_string().contains("between 1 and 12"));
    }
}
