//! Error types and HTTP error response handling.
//!
//! This module defines the account error taxonomy and how each kind is
//! converted into an HTTP response with a status code and JSON body.

use std::time::Duration;

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use uuid::Uuid;

/// Convenience alias used by the store and the handlers.
pub type AppResult<T> = Result<T, AppError>;

/// A persistence failure that is not a missing row.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The driver reported a failure (connectivity, constraint violation,
    /// decode error, ...).
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The query did not finish within the configured deadline and was
    /// cancelled.
    #[error("database query timed out after {0:?}")]
    Timeout(Duration),
}

/// Application-wide error type.
///
/// # Error Categories
///
/// - **Validation**: malformed identifier or request body, rejected before
///   the store is touched
/// - **Not found**: the targeted account does not exist
/// - **Storage**: any other persistence failure
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Request path or body is invalid.
    ///
    /// Returns HTTP 400 Bad Request with the message as payload.
    #[error("{0}")]
    Validation(String),

    /// No account row matches the identifier.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("account not found: {0}")]
    AccountNotFound(Uuid),

    /// Returns HTTP 400 Bad Request with the underlying message.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Storage(StorageError::Database(err))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(format!("invalid request body: {}", rejection.body_text()))
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Validation(format!("invalid account id: {}", rejection.body_text()))
    }
}

/// Convert AppError into an HTTP response.
///
/// All errors return JSON in this format:
/// ```json
/// { "error": "Human-readable error message" }
/// ```
///
/// # Status Code Mapping
///
/// - `Validation` → 400 Bad Request
/// - `AccountNotFound` → 404 Not Found
/// - `Storage` → 400 Bad Request, underlying message included
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::AccountNotFound(_) => StatusCode::NOT_FOUND,
            AppError::Storage(ref e) => {
                tracing::error!("Storage error: {:?}", e);
                StatusCode::BAD_REQUEST
            }
        };

        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}
