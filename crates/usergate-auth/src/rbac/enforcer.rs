//! Self-or-admin enforcement.

use tracing::debug;

use usergate_core::types::UserId;

use crate::error::AuthError;
use crate::jwt::Claims;

/// Grants or denies actions based on the caller's claims.
///
/// Administrators may act on any account; everyone else only on their own.
#[derive(Debug, Clone, Copy, Default)]
pub struct RbacEnforcer;

impl RbacEnforcer {
    /// Creates a new enforcer.
    pub fn new() -> Self {
        Self
    }

    /// Allows the action iff the caller is an admin or owns `target_owner`.
    pub fn authorize_owner(&self, claims: &Claims, target_owner: &UserId) -> Result<(), AuthError> {
        if claims.is_admin || claims.sub == *target_owner {
            return Ok(());
        }
        debug!(user_id = %claims.sub, target = %target_owner, "Owner check denied");
        Err(AuthError::InsufficientPermission)
    }

    /// Allows the action iff the caller is an admin.
    pub fn require_admin(&self, claims: &Claims) -> Result<(), AuthError> {
        if claims.is_admin {
            return Ok(());
        }
        debug!(user_id = %claims.sub, "Admin check denied");
        Err(AuthError::InsufficientPermission)
    }
}
