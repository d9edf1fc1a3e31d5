//! Request context carrying the verified session claims.

use usergate_auth::jwt::Claims;
use usergate_core::types::UserId;

/// Context for the current authenticated request.
///
/// Built from verified claims by the HTTP layer and passed into service
/// methods so every operation knows *who* is acting. Lives only for the
/// duration of one request.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Verified claims of the caller's token.
    pub claims: Claims,
}

impl RequestContext {
    /// Creates a new request context from verified claims.
    pub fn new(claims: Claims) -> Self {
        Self { claims }
    }

    /// The authenticated user's ID.
    pub fn user_id(&self) -> UserId {
        self.claims.sub
    }

    /// Returns whether the caller's token carries the administrator flag.
    pub fn is_admin(&self) -> bool {
        self.claims.is_admin
    }
}
