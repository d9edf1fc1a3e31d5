//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use usergate_core::types::UserId;

/// A registered user account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Email address, unique across all users (case-insensitive).
    pub email: String,
    /// Human-readable name.
    pub name: String,
    /// Whether this user may act on any account, not just its own.
    pub is_admin: bool,
    /// PHC-formatted password hash.
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Builds a new user record from creation data with a fresh identifier.
    pub fn new(data: CreateUser) -> Self {
        let now = Utc::now();
        Self {
            id: UserId::new(),
            email: data.email,
            name: data.name,
            is_admin: data.is_admin,
            password_hash: data.password_hash,
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies a partial update in place and bumps `updated_at`.
    ///
    /// The administrator flag is not part of [`UpdateUser`] and can only be
    /// set at creation.
    pub fn apply(&mut self, patch: UpdateUser) {
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(password_hash) = patch.password_hash {
            self.password_hash = password_hash;
        }
        self.updated_at = Utc::now();
    }
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Email address.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Administrator flag.
    pub is_admin: bool,
    /// Pre-hashed password.
    pub password_hash: String,
}

/// Partial update of a stored user. `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUser {
    /// New email address.
    pub email: Option<String>,
    /// New display name.
    pub name: Option<String>,
    /// New pre-hashed password.
    pub password_hash: Option<String>,
}
