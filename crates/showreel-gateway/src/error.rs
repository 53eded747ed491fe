use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use showreel_core::StorageError;
use thiserror::Error;

use crate::model::Envelope;

pub type Result<T> = std::result::Result<T, ApiError>;

/// Everything a handler can fail with, mapped exhaustively onto a status
/// code and a failure envelope in one place.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("video not found")]
    NotFound,
    #[error("{context}: {source}")]
    Store {
        context: &'static str,
        source: StorageError,
    },
}

impl ApiError {
    /// Wraps a store failure with the route's error message as context.
    pub fn store(context: &'static str) -> impl FnOnce(StorageError) -> Self {
        move |source| Self::Store { context, source }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, envelope) = match self {
            ApiError::Validation(message) => (StatusCode::BAD_REQUEST, Envelope::failure(message)),
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                Envelope::failure("Video not found"),
            ),
            ApiError::Store { context, source } => {
                tracing::error!(context, error = %source, "store operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Envelope::failure_with_error(context, source.to_string()),
                )
            }
        };

        (status, Json(envelope)).into_response()
    }
}
