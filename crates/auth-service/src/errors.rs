//! Auth service error types.
//!
//! Errors map to HTTP status codes via the `IntoResponse` impl. Response
//! bodies are the bare error message as plain text: the web client that
//! consumes the legacy login endpoints expects an opaque string payload,
//! not structured error JSON.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Auth service error type.
///
/// Maps to HTTP status codes:
/// - ExpiredToken, InvalidToken: 401 Unauthorized
/// - LoginRejected, UserNotFound: 400 Bad Request
/// - ServiceUnavailable: 502 Bad Gateway
/// - Internal: 500 Internal Server Error
///
/// Note: the login handler collapses every pipeline failure to 400 before
/// this mapping is consulted; the table above applies to the Bearer-protected
/// routes.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Token has expired")]
    ExpiredToken,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("{0}")]
    LoginRejected(String),

    #[error("{0}")]
    UserNotFound(String),

    #[error("{0}")]
    ServiceUnavailable(String),

    #[error("Internal server error")]
    Internal,
}

impl AuthError {
    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::ExpiredToken | AuthError::InvalidToken(_) => StatusCode::UNAUTHORIZED,
            AuthError::LoginRejected(_) | AuthError::UserNotFound(_) => StatusCode::BAD_REQUEST,
            AuthError::ServiceUnavailable(_) => StatusCode::BAD_GATEWAY,
            AuthError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}
