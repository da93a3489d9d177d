//! Auth Error Types
//!
//! Auth-specific error variants that integrate with the unified
//! `kernel::error::AppError` system. Domain errors carry the exact
//! user-facing messages; unexpected failures are logged and collapse to a
//! uniform 500 body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Registration with an email that already exists
    #[error("Email already exists.")]
    EmailTaken,

    /// Unknown email or wrong password; deliberately one message for both
    #[error("Invalid email or password.")]
    InvalidCredentials,

    /// Reset token missing from the store or past its expiry
    #[error("Invalid or expired password reset token.")]
    ResetTokenInvalid,

    /// Reset token references a user that no longer exists
    #[error("Invalid password reset token.")]
    ResetTokenUserMissing,

    /// Profile lookup for a user that does not exist
    #[error("User not found.")]
    UserNotFound,

    /// No bearer credential on a protected request
    #[error("Unauthorized. No token provided.")]
    NoToken,

    /// Bearer token failed verification (signature, expiry, malformed)
    #[error("Unauthorized. Invalid token.")]
    InvalidToken,

    /// Verified token, but no matching live user
    #[error("Unauthorized. User not found.")]
    TokenUserNotFound,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::EmailTaken => StatusCode::CONFLICT,
            AuthError::InvalidCredentials
            | AuthError::NoToken
            | AuthError::InvalidToken
            | AuthError::TokenUserNotFound => StatusCode::UNAUTHORIZED,
            AuthError::ResetTokenInvalid | AuthError::ResetTokenUserMissing => {
                StatusCode::BAD_REQUEST
            }
            AuthError::UserNotFound => StatusCode::NOT_FOUND,
            AuthError::Database(_) | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::EmailTaken => ErrorKind::Conflict,
            AuthError::InvalidCredentials
            | AuthError::NoToken
            | AuthError::InvalidToken
            | AuthError::TokenUserNotFound => ErrorKind::Unauthorized,
            AuthError::ResetTokenInvalid | AuthError::ResetTokenUserMissing => {
                ErrorKind::BadRequest
            }
            AuthError::UserNotFound => ErrorKind::NotFound,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError; internal detail never reaches the caller
    pub fn to_app_error(&self) -> AppError {
        if self.kind().is_server_error() {
            AppError::internal("Internal Server Error.")
        } else {
            AppError::new(self.kind(), self.to_string())
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::InvalidToken | AuthError::TokenUserNotFound => {
                tracing::warn!(error = %self, "Rejected bearer token");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<platform::password::PasswordHashError> for AuthError {
    fn from(err: platform::password::PasswordHashError) -> Self {
        AuthError::Internal(err.to_string())
    }
}

impl From<platform::token::TokenError> for AuthError {
    fn from(err: platform::token::TokenError) -> Self {
        match err {
            platform::token::TokenError::SigningFailed(msg) => AuthError::Internal(msg),
            _ => AuthError::InvalidToken,
        }
    }
}
