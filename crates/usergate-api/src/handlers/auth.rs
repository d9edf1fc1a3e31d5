//! Authentication handlers.

use axum::Json;
use axum::extract::State;

use crate::dto::request::LoginRequest;
use crate::dto::response::TokenResponse;
use crate::error::ApiError;
use crate::extractors::JsonBody;
use crate::state::AppState;

/// POST /login
///
/// Empty fields are not rejected up front; they fail like any other wrong
/// credentials.
pub async fn login(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let token = state.user_service.login(&req.email, &req.password).await?;

    Ok(Json(TokenResponse { token }))
}
