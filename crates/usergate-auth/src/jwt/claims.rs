//! Session claims embedded in every token.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use usergate_core::types::UserId;

/// Fixed token lifetime. Not configurable per call.
pub const TOKEN_TTL_HOURS: i64 = 24;

/// JWT claims payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user ID.
    pub sub: UserId,
    /// Administrator flag at the time of issuance.
    pub is_admin: bool,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Builds claims for `subject` issued at `issued_at`.
    pub fn new(subject: UserId, is_admin: bool, issued_at: DateTime<Utc>) -> Self {
        let expires_at = issued_at + chrono::Duration::hours(TOKEN_TTL_HOURS);
        Self {
            sub: subject,
            is_admin,
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        }
    }

    /// Whether the token is expired at `now`. A token is valid strictly before `exp`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }
}
