//! Custom Axum extractors.

pub mod auth;
pub mod json;
pub mod target;

pub use auth::AuthUser;
pub use json::JsonBody;
pub use target::resolve_target;
