//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication and credential configuration.
///
/// `jwt_secret` has no default: a deployment that does not provide one
/// fails at startup rather than signing tokens with a well-known key.
#[derive(Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for session token signing (HMAC-SHA256).
    pub jwt_secret: String,
    /// Minimum password length accepted at registration and update.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"<redacted>")
            .field("password_min_length", &self.password_min_length)
            .finish()
    }
}

impl AuthConfig {
    /// Builds an auth configuration around the given secret.
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: secret.into(),
            password_min_length: default_password_min(),
        }
    }
}

fn default_password_min() -> usize {
    1
}
