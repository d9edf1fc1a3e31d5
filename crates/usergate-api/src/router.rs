//! Route definitions for the UserGate HTTP API.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, patch, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::middleware::cors::build_cors_layer;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .route("/health", get(handlers::health::health))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Login.
fn auth_routes() -> Router<AppState> {
    Router::new().route("/login", post(handlers::auth::login))
}

/// Registration and per-account operations.
fn user_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users",
            post(handlers::user::register).get(handlers::user::list_users),
        )
        .route("/users/profile", get(handlers::user::get_profile))
        .route(
            "/users/{id}",
            patch(handlers::user::update_user).delete(handlers::user::delete_user),
        )
}
