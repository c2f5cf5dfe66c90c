//! Stub Error Types
//!
//! Every failure leaves the stub as a `{status: false, message}` envelope.

use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::Envelope;

#[derive(Error, Debug)]
pub enum StubError {
    /// Missing or blank required field
    #[error("{0}")]
    Validation(String),

    #[error("Blog not found")]
    NotFound,

    /// POST to a post URL without the update override
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Unreadable multipart body
    #[error("Invalid form data: {0}")]
    BadRequest(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<MultipartError> for StubError {
    fn from(err: MultipartError) -> Self {
        StubError::BadRequest(err.to_string())
    }
}

impl IntoResponse for StubError {
    fn into_response(self) -> Response {
        let status = match &self {
            StubError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            StubError::NotFound => StatusCode::NOT_FOUND,
            StubError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            StubError::BadRequest(_) => StatusCode::BAD_REQUEST,
            StubError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "Stub backend error");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "Rejecting request");
        }

        (status, Json(Envelope::<()>::rejected(self.to_string()))).into_response()
    }
}

pub type StubResult<T> = Result<T, StubError>;
