//! Identity Error Types
//!
//! This module provides identity-specific error variants that integrate
//! with the unified `kernel::error::AppError` system. Every variant is a
//! client-fault outcome except `Database` and `Internal`, which pass
//! through to the boundary unclassified.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Identity-specific result type alias
pub type IdentityResult<T> = Result<T, IdentityError>;

/// Identity-specific error variants
#[derive(Debug, Error)]
pub enum IdentityError {
    /// Email is already registered
    #[error("Email already registered")]
    DuplicateEmail,

    /// Date of birth could not be parsed
    #[error("Invalid date_of_birth format")]
    InvalidDate,

    /// Account not found by id
    #[error("Account not found")]
    AccountNotFound,

    /// Account is already verified
    #[error("Email already verified")]
    AlreadyVerified,

    /// Token failed signature, structure, or expiry checks.
    /// Intentionally a single variant: callers must not learn which.
    #[error("Invalid or expired token")]
    InvalidOrExpiredToken,

    /// Wrong email or password. The message is deliberately generic to
    /// avoid account enumeration.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Account exists but is not Active (pending verification or
    /// suspended). The message never distinguishes the two.
    #[error("Please verify your email before logging in")]
    EmailNotVerified,

    /// Credentials were correct but the password is older than the
    /// aging limit
    #[error("Your password has expired. Please change your password.")]
    PasswordExpired,

    /// Current password given at password change does not match
    #[error("Current password is incorrect")]
    IncorrectPassword,

    /// New password matches one of the recent historical hashes
    #[error("New password must not match any of your last 5 passwords")]
    PasswordReused,

    /// Password failed validation rules
    #[error("Password validation failed: {0}")]
    PasswordValidation(String),

    /// Input failed structural validation (email format, field shape)
    #[error("{0}")]
    Validation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IdentityError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            IdentityError::DuplicateEmail => StatusCode::CONFLICT,
            IdentityError::AccountNotFound => StatusCode::NOT_FOUND,
            IdentityError::PasswordExpired => StatusCode::FORBIDDEN,
            IdentityError::InvalidDate
            | IdentityError::AlreadyVerified
            | IdentityError::InvalidOrExpiredToken
            | IdentityError::InvalidCredentials
            | IdentityError::EmailNotVerified
            | IdentityError::IncorrectPassword
            | IdentityError::PasswordReused
            | IdentityError::PasswordValidation(_)
            | IdentityError::Validation(_) => StatusCode::BAD_REQUEST,
            IdentityError::Database(_) | IdentityError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            IdentityError::DuplicateEmail => ErrorKind::Conflict,
            IdentityError::AccountNotFound => ErrorKind::NotFound,
            IdentityError::PasswordExpired => ErrorKind::Forbidden,
            IdentityError::InvalidDate
            | IdentityError::AlreadyVerified
            | IdentityError::InvalidOrExpiredToken
            | IdentityError::InvalidCredentials
            | IdentityError::EmailNotVerified
            | IdentityError::IncorrectPassword
            | IdentityError::PasswordReused
            | IdentityError::PasswordValidation(_)
            | IdentityError::Validation(_) => ErrorKind::BadRequest,
            IdentityError::Database(_) | IdentityError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            IdentityError::Database(e) => {
                tracing::error!(error = %e, "Identity database error");
            }
            IdentityError::Internal(msg) => {
                tracing::error!(message = %msg, "Identity internal error");
            }
            IdentityError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            IdentityError::PasswordExpired => {
                tracing::warn!("Login attempt with expired password");
            }
            _ => {
                tracing::debug!(error = %self, "Identity error");
            }
        }
    }
}

impl IntoResponse for IdentityError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for IdentityError {
    fn from(err: AppError) -> Self {
        if err.kind().is_client_error() {
            IdentityError::Validation(err.message().to_string())
        } else {
            IdentityError::Internal(err.to_string())
        }
    }
}

impl From<platform::password::PasswordPolicyError> for IdentityError {
    fn from(err: platform::password::PasswordPolicyError) -> Self {
        IdentityError::PasswordValidation(err.to_string())
    }
}

impl From<platform::password::PasswordHashError> for IdentityError {
    fn from(err: platform::password::PasswordHashError) -> Self {
        IdentityError::Internal(err.to_string())
    }
}
