//! Credential hashing, verification, and password policy.

pub mod hasher;
pub mod validator;

pub use hasher::{PasswordError, PasswordHasher};
pub use validator::PasswordValidator;
