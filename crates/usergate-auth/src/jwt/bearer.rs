//! `Authorization: Bearer <token>` parsing.

use crate::error::AuthError;

/// Extracts the token from an `Authorization` header value.
///
/// A missing header, a non-bearer scheme, and an empty token all yield
/// [`AuthError::MissingAuthorization`].
pub fn bearer_token(header: Option<&str>) -> Result<&str, AuthError> {
    let value = header.ok_or(AuthError::MissingAuthorization)?;
    let (scheme, token) = value
        .trim()
        .split_once(' ')
        .ok_or(AuthError::MissingAuthorization)?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(AuthError::MissingAuthorization);
    }

    let token = token.trim();
    if token.is_empty() {
        return Err(AuthError::MissingAuthorization);
    }
    Ok(token)
}
