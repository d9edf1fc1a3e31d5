//! # usergate-api
//!
//! HTTP API layer for UserGate built on Axum.
//!
//! Provides the account endpoints, the bearer-token extractor, request
//! logging and CORS middleware, DTOs, and the mapping from domain errors
//! to HTTP responses.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
