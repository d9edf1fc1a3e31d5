//! Account handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::dto::request::{CreateUserRequest, PatchUserRequest, validated};
use crate::dto::response::UserResponse;
use crate::error::ApiError;
use crate::extractors::{AuthUser, JsonBody, resolve_target};
use crate::state::AppState;

/// POST /users
pub async fn register(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let req = validated(req)?;
    let user = state.user_service.register(req.into()).await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// GET /users
pub async fn list_users(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = state.user_service.list_users(&auth).await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// GET /users/profile
pub async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state.user_service.get_profile(&auth).await?;

    Ok(Json(UserResponse::from(user)))
}

/// PATCH /users/{id}
///
/// The owner check runs before the body is parsed or validated, so a
/// non-admin gets 403 for someone else's id whatever the body holds.
pub async fn update_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    body: Result<JsonBody<PatchUserRequest>, ApiError>,
) -> Result<Json<UserResponse>, ApiError> {
    let id = resolve_target(&auth, &id)?;
    state.rbac.authorize_owner(&auth.claims, &id)?;

    let JsonBody(req) = body?;
    let req = validated(req)?;
    let user = state
        .user_service
        .update_user(&auth, id, req.into())
        .await?;

    Ok(Json(UserResponse::from(user)))
}

/// DELETE /users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = resolve_target(&auth, &id)?;
    state.user_service.delete_user(&auth, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
