//! Argon2id password hashing and verification.

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{
        PasswordHash, PasswordHasher as ArgonHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use thiserror::Error;
use tracing::warn;

use usergate_core::error::AppError;

/// Failures of the credential verifier itself, as opposed to a mismatch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordError {
    /// The plaintext cannot be hashed (empty).
    #[error("password input is invalid")]
    InvalidInput,
    /// The stored hash is not a parseable PHC string.
    #[error("stored password hash is malformed: {0}")]
    MalformedHash(String),
    /// The hashing backend failed.
    #[error("password hashing failed: {0}")]
    Backend(String),
}

impl From<PasswordError> for AppError {
    fn from(err: PasswordError) -> Self {
        match err {
            PasswordError::InvalidInput => AppError::validation("Password must not be empty"),
            other => AppError::internal(other.to_string()),
        }
    }
}

/// Plaintext behind the per-hasher dummy hash.
const DUMMY_PASSWORD: &str = "usergate-timing-equalizer";

/// Handles password hashing and verification using Argon2id.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    /// Configured Argon2id instance.
    argon2: Argon2<'static>,
    /// Hash compared against when the account does not exist. Built with
    /// the same costs at construction, so an unknown email costs exactly
    /// one verification, like a wrong password.
    dummy_hash: Option<String>,
}

impl PasswordHasher {
    /// Creates a hasher with the default Argon2id cost parameters.
    pub fn new() -> Self {
        Self::from_argon2(Argon2::default())
    }

    /// Creates a hasher with explicit memory (KiB) and iteration costs.
    pub fn with_cost(memory_kib: u32, iterations: u32) -> Result<Self, PasswordError> {
        let params = Params::new(memory_kib, iterations, Params::DEFAULT_P_COST, None)
            .map_err(|e| PasswordError::Backend(e.to_string()))?;
        Ok(Self::from_argon2(Argon2::new(
            Algorithm::Argon2id,
            Version::V0x13,
            params,
        )))
    }

    fn from_argon2(argon2: Argon2<'static>) -> Self {
        let mut hasher = Self {
            argon2,
            dummy_hash: None,
        };
        hasher.dummy_hash = hasher.hash_password(DUMMY_PASSWORD).ok();
        if hasher.dummy_hash.is_none() {
            warn!("Timing equalizer hash unavailable");
        }
        hasher
    }

    /// Hashes a plaintext password with a random salt.
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        if password.is_empty() {
            return Err(PasswordError::InvalidInput);
        }

        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| PasswordError::Backend(e.to_string()))?;

        Ok(hash.to_string())
    }

    /// Verifies a plaintext password against a stored PHC hash.
    ///
    /// Returns `Ok(true)` on match and `Ok(false)` on mismatch. A corrupt
    /// stored hash is an error, not a mismatch.
    pub fn verify_password(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        let parsed_hash =
            PasswordHash::new(hash).map_err(|e| PasswordError::MalformedHash(e.to_string()))?;
        if parsed_hash.salt.is_none() || parsed_hash.hash.is_none() {
            return Err(PasswordError::MalformedHash(
                "missing salt or hash output".to_string(),
            ));
        }

        match self.argon2.verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(PasswordError::MalformedHash(e.to_string())),
        }
    }

    /// Burns one verification against a fixed hash and always returns `false`.
    pub fn verify_dummy(&self, password: &str) -> bool {
        if let Some(hash) = self.dummy_hash.as_deref() {
            let _ = self.verify_password(password, hash);
        }
        false
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
