//! Session token creation.

use chrono::{DateTime, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};

use usergate_core::config::AuthConfig;
use usergate_core::error::AppError;
use usergate_core::types::UserId;

use super::claims::Claims;

/// Creates signed HS256 session tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder").finish_non_exhaustive()
    }
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
        }
    }

    /// Mints a token for `subject`, valid for 24 hours from now.
    pub fn mint(&self, subject: UserId, is_admin: bool) -> Result<String, AppError> {
        self.mint_at(subject, is_admin, Utc::now())
    }

    /// Mints a token as if issued at `issued_at`.
    pub fn mint_at(
        &self,
        subject: UserId,
        is_admin: bool,
        issued_at: DateTime<Utc>,
    ) -> Result<String, AppError> {
        let claims = Claims::new(subject, is_admin, issued_at);
        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode session token: {e}")))
    }
}
