//! Error handling - every failure is rendered as the `{ success, error }` envelope.

use actix_web::error::{JsonPayloadError, QueryPayloadError};
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use murmur_core::{DomainError, StorageError};
use murmur_shared::ApiResponse;
use std::fmt;

/// Application-level error type that converts to envelope responses.
#[derive(Debug)]
pub enum AppError {
    /// Rejected input; the message is shown to the caller verbatim.
    BadRequest(String),
    /// Storage failure; the caller only sees `message`.
    Storage {
        message: &'static str,
        source: StorageError,
    },
}

impl AppError {
    /// Adapter for `map_err` that tags a storage failure with its public message.
    pub fn storage(message: &'static str) -> impl FnOnce(StorageError) -> AppError {
        move |source| AppError::Storage { message, source }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Storage { message, source } => write!(f, "{}: {}", message, source),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::BadRequest(detail) => {
                tracing::debug!("Rejected request: {}", detail);
                ApiResponse::<()>::error(detail.as_str())
            }
            AppError::Storage { message, source } => {
                tracing::error!(error = %source, "{}", message);
                ApiResponse::<()>::error(*message)
            }
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => AppError::BadRequest(msg),
        }
    }
}

/// Render JSON body extraction failures as envelopes.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(format!("Invalid request body: {}", err)).into()
}

/// Render query string extraction failures as envelopes.
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(format!("Invalid query string: {}", err)).into()
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
