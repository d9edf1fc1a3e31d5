//! # usergate-auth
//!
//! Authentication and authorization primitives for UserGate.
//!
//! ## Modules
//!
//! - `password`: Argon2id credential hashing, verification, and length policy
//! - `jwt`: session token minting and verification (HS256, 24h lifetime)
//! - `rbac`: self-or-admin access decisions derived from token claims
//! - `error`: the client-facing authentication failure taxonomy

pub mod error;
pub mod jwt;
pub mod password;
pub mod rbac;

pub use error::AuthError;
pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::{PasswordError, PasswordHasher, PasswordValidator};
pub use rbac::RbacEnforcer;
