//! # usergate-service
//!
//! Business logic service layer for UserGate. Services orchestrate the
//! user repository, the credential verifier, and the session token service
//! to implement the account use cases.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod context;
pub mod user;

pub use context::RequestContext;
pub use user::UserService;
