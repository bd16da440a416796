//! # API Error Types
//!
//! [`ApiError`] turns facade errors and transport problems into JSON
//! responses. The `code` field carries the forum translation key so clients
//! can localize the message.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use flagdesk_domain::FlagsError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Translation key for requests without a usable caller identity.
pub const NOT_LOGGED_IN_CODE: &str = "[[error:not-logged-in]]";

/// JSON error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

/// Error returned by every HTTP handler.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Flags(#[from] FlagsError),

    /// Body or path could not be parsed into the expected request shape (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Caller identity header missing or malformed (401).
    #[error("unauthorized: {0}")]
    Unauthorized(String),
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::Flags(err) => (flags_status(err), err.code()),
            Self::BadRequest(_) => (StatusCode::BAD_REQUEST, FlagsError::InvalidData.code()),
            Self::Unauthorized(_) => (StatusCode::UNAUTHORIZED, NOT_LOGGED_IN_CODE),
        }
    }
}

fn flags_status(err: &FlagsError) -> StatusCode {
    match err {
        FlagsError::InvalidData => StatusCode::BAD_REQUEST,
        FlagsError::NoPrivileges => StatusCode::FORBIDDEN,
        FlagsError::NoFlag | FlagsError::NoPost | FlagsError::NoUser => StatusCode::NOT_FOUND,
        FlagsError::AlreadyFlagged | FlagsError::SelfFlag => StatusCode::CONFLICT,
        FlagsError::Config(_) | FlagsError::Storage(_) | FlagsError::Internal(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let message = if status.is_server_error() {
            tracing::error!(error = %self, "internal server error");
            "An internal error occurred".to_string()
        } else {
            self.to_string()
        };

        let body = ErrorBody { error: ErrorDetail { code: code.to_string(), message } };
        (status, Json(body)).into_response()
    }
}
