//! Unified error handling for the server.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use toolscout_core::{IntentError, IntentErrorCode};

use crate::db::KvError;
use crate::openai::OpenAiError;
use crate::search::SearchError;

/// Application-level error type for the HTTP surface.
#[derive(Debug, Error)]
pub enum AppError {
    /// Key-value store operation failed.
    #[error("Store error: {0}")]
    Store(#[from] KvError),

    /// `OpenAI` API operation failed.
    #[error("OpenAI error: {0}")]
    OpenAi(#[from] OpenAiError),

    /// Search operation failed.
    #[error("Search error: {0}")]
    Search(#[from] SearchError),

    /// Intent analysis reached a terminal outcome. Carries the structured
    /// user-facing payload.
    #[error("Intent error: {}", .0.message)]
    Intent(IntentError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<IntentError> for AppError {
    fn from(error: IntentError) -> Self {
        Self::Intent(error)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log server errors with Sentry
        if matches!(self, Self::Store(_) | Self::Internal(_) | Self::Search(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Server request error"
            );
        }

        match self {
            // Intent errors carry a structured user-facing body.
            Self::Intent(error) => {
                let status = match error.code {
                    IntentErrorCode::LowConfidence => StatusCode::UNPROCESSABLE_ENTITY,
                    IntentErrorCode::ParseError | IntentErrorCode::ApiError => {
                        StatusCode::BAD_GATEWAY
                    }
                };
                (status, Json(json!({ "error": error }))).into_response()
            }

            // Don't expose internal error details to clients
            Self::Store(_) | Self::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            )
                .into_response(),
            Self::OpenAi(_) | Self::Search(_) => (
                StatusCode::BAD_GATEWAY,
                "External service error".to_string(),
            )
                .into_response(),
            Self::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()).into_response(),
            Self::BadRequest(_) => (StatusCode::BAD_REQUEST, self.to_string()).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_status(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("tool-x".to_string());
        assert_eq!(err.to_string(), "Not found: tool-x");

        let err = AppError::BadRequest("invalid input".to_string());
        assert_eq!(err.to_string(), "Bad request: invalid input");
    }

    #[test]
    fn test_app_error_status_codes() {
        assert_eq!(
            get_status(AppError::NotFound("test".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::BadRequest("test".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Internal("test".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_intent_error_status_codes() {
        let low_confidence = AppError::Intent(IntentError {
            code: IntentErrorCode::LowConfidence,
            message: "be more specific".to_string(),
            suggestions: vec!["Example: design a logo".to_string()],
        });
        assert_eq!(get_status(low_confidence), StatusCode::UNPROCESSABLE_ENTITY);

        let api_error = AppError::Intent(IntentError {
            code: IntentErrorCode::ApiError,
            message: "service down".to_string(),
            suggestions: Vec::new(),
        });
        assert_eq!(get_status(api_error), StatusCode::BAD_GATEWAY);
    }
}
