//! Error types for response formatting.

use axum::http::{header::InvalidHeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use crate::http::response::ResponseFactory;
use crate::http::status;

/// Errors raised while writing a response.
///
/// These are never swallowed by the factory; handlers decide what to do.
#[derive(Debug, Error)]
pub enum ResponseError {
    /// The payload could not be turned into JSON.
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A header value contained bytes not allowed on the wire.
    #[error("invalid value for header {name}: {source}")]
    InvalidHeader {
        name: String,
        #[source]
        source: InvalidHeaderValue,
    },

    /// Status code outside 100..=999.
    #[error("invalid HTTP status code {0}")]
    InvalidStatus(u16),
}

/// Result type for response operations.
pub type ResponseResult<T> = Result<T, ResponseError>;

/// The JSON error envelope sent to clients.
///
/// Field order matters: clients and tests expect `error` before `message`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody<'a> {
    pub error: u16,
    pub message: &'a str,
}

/// An application-level failure reported to the client as an error envelope.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}: {message}", .status.as_u16())]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(status::NOT_FOUND, message)
    }
}

impl From<ResponseError> for ApiError {
    fn from(err: ResponseError) -> Self {
        tracing::error!(error = %err, "Failed to build response");
        Self::new(status::INTERNAL_SERVER_ERROR, "internal server error")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match ResponseFactory::error(self.status.as_u16(), &self.message) {
            Ok(response) => response,
            Err(err) => {
                tracing::error!(
                    status = self.status.as_u16(),
                    error = %err,
                    "Failed to build error response"
                );
                status::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
