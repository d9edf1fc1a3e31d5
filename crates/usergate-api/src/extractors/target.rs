//! Resolution of the `{id}` path segment on per-account routes.

use usergate_auth::error::AuthError;
use usergate_core::error::AppError;
use usergate_core::types::UserId;
use usergate_service::context::RequestContext;

use crate::error::ApiError;

/// Parses the target account id.
///
/// An unparseable id names no account. Admins get 404 for it; everyone
/// else gets the same 403 as for any id that is not their own.
pub fn resolve_target(ctx: &RequestContext, raw: &str) -> Result<UserId, ApiError> {
    raw.parse::<UserId>().map_err(|_| {
        if ctx.is_admin() {
            ApiError::from(AppError::not_found("User not found"))
        } else {
            ApiError::from(AuthError::InsufficientPermission)
        }
    })
}
