use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use watchpost_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce `{ "message": ..., "field"?: ... }`
/// JSON bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `watchpost_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A lookup whose id could not even be parsed. Reported exactly like a
    /// lookup of an unknown id.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// Error body returned to clients.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ErrorBody {
    fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field: None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Core(CoreError::NotFound { entity, .. }) | AppError::NotFound(entity) => (
                StatusCode::NOT_FOUND,
                ErrorBody::message(format!("{entity} not found")),
            ),
            AppError::Core(CoreError::Validation { field, message }) => {
                (StatusCode::BAD_REQUEST, ErrorBody { message, field })
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ErrorBody::message(msg)),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::message("An internal error occurred"),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}
