//! # HTTP Errors
//!
//! Maps service outcomes onto status codes and response bodies.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::service::ServiceError;
use crate::validation::Violation;

/// Result type for handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors a handler can answer with
#[derive(Debug, Error)]
pub enum ApiError {
    /// Body or query could not be decoded
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    /// Decoded body broke one or more constraints
    #[error("Validation failed")]
    ValidationFailed(Vec<Violation>),

    /// No beer with the requested id
    #[error("Resource not found")]
    NotFound,

    /// Store failure or anything else unexpected
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MalformedRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::ValidationFailed(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::ValidationFailed(violations) => ApiError::ValidationFailed(violations),
            ServiceError::Store(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::MalformedRequest(rejection.body_text())
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<Violation>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error = self.to_string();

        let violations = match self {
            ApiError::NotFound => return status.into_response(),
            ApiError::ValidationFailed(violations) => violations,
            ApiError::Internal(msg) => {
                error!(error = %msg, "request failed");
                Vec::new()
            }
            ApiError::MalformedRequest(_) => Vec::new(),
        };

        let body = ErrorResponse {
            error,
            code: status.as_u16(),
            violations,
        };
        (status, Json(body)).into_response()
    }
}
