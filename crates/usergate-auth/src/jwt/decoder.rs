//! Session token verification.

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use tracing::debug;

use usergate_core::config::AuthConfig;

use super::claims::Claims;
use crate::error::AuthError;

/// Verifies session tokens against the process-wide secret.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Signature and claim-presence rules. Expiry is checked separately.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "iat", "sub"]);

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Verifies a token and returns its claims.
    ///
    /// Malformed structure, bad signature, wrong algorithm and expiry all
    /// produce the same [`AuthError::InvalidOrExpiredToken`].
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        self.verify_at(token, Utc::now())
    }

    /// Verifies a token as of `now`.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, AuthError> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                debug!(reason = ?e.kind(), "Session token rejected");
                AuthError::InvalidOrExpiredToken
            })?
            .claims;

        if claims.is_expired_at(now) {
            debug!(user_id = %claims.sub, "Session token expired");
            return Err(AuthError::InvalidOrExpiredToken);
        }

        Ok(claims)
    }
}
