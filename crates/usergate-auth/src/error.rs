//! Authentication and authorization failures.
//!
//! Every variant is terminal for the request that produced it. Token
//! failures are deliberately collapsed: clients cannot tell a forged token
//! from an expired or garbled one, or from a missing header.

use thiserror::Error;

use usergate_core::error::AppError;

/// Client-visible message for every bearer-token failure.
pub const INVALID_AUTHORIZATION_MESSAGE: &str = "Missing authorization headers";

/// Client-visible message for every login failure.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Wrong email/password";

/// Client-visible message for permission failures.
pub const INSUFFICIENT_PERMISSION_MESSAGE: &str = "missing admin permissions";

/// Authentication and authorization errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Unknown email or wrong password. Never says which.
    #[error("invalid credentials")]
    InvalidCredentials,
    /// No `Authorization` header, or one without a bearer token.
    #[error("missing authorization")]
    MissingAuthorization,
    /// Malformed, forged, or expired token.
    #[error("invalid or expired token")]
    InvalidOrExpiredToken,
    /// Authenticated, but not allowed to act on the target.
    #[error("insufficient permission")]
    InsufficientPermission,
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => AppError::authentication(INVALID_CREDENTIALS_MESSAGE),
            AuthError::MissingAuthorization | AuthError::InvalidOrExpiredToken => {
                AppError::authentication(INVALID_AUTHORIZATION_MESSAGE)
            }
            AuthError::InsufficientPermission => {
                AppError::authorization(INSUFFICIENT_PERMISSION_MESSAGE)
            }
        }
    }
}
