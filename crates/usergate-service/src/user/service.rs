//! Account use cases: register, login, profile, update, delete, list.

use std::sync::Arc;

use tracing::{debug, info, warn};

use usergate_auth::error::AuthError;
use usergate_auth::jwt::JwtEncoder;
use usergate_auth::password::{PasswordError, PasswordHasher, PasswordValidator};
use usergate_auth::rbac::RbacEnforcer;
use usergate_core::error::AppError;
use usergate_core::traits::Repository;
use usergate_core::types::UserId;
use usergate_database::repositories::UserRepository;
use usergate_entity::user::{CreateUser, UpdateUser, User};

use crate::context::RequestContext;

/// Handles user account operations.
#[derive(Clone)]
pub struct UserService {
    /// User repository.
    user_repo: Arc<dyn UserRepository>,
    /// Credential verifier.
    hasher: Arc<PasswordHasher>,
    /// Password policy.
    validator: Arc<PasswordValidator>,
    /// Session token minting.
    encoder: Arc<JwtEncoder>,
    /// Self-or-admin checks.
    rbac: RbacEnforcer,
}

impl std::fmt::Debug for UserService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserService").finish_non_exhaustive()
    }
}

/// Data for registering a new account.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RegisterRequest {
    /// Email address (unique).
    pub email: String,
    /// Display name.
    pub name: String,
    /// Administrator flag.
    pub is_admin: bool,
    /// Initial password.
    pub password: String,
}

/// Partial account update.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct UpdateUserRequest {
    /// New email.
    pub email: Option<String>,
    /// New display name.
    pub name: Option<String>,
    /// New password, hashed before storage.
    pub password: Option<String>,
    /// Accepted for compatibility but ignored: the flag is fixed at registration.
    pub is_admin: Option<bool>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
        encoder: Arc<JwtEncoder>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            validator,
            encoder,
            rbac: RbacEnforcer::new(),
        }
    }

    /// Registers a new account.
    pub async fn register(&self, req: RegisterRequest) -> Result<User, AppError> {
        if self.user_repo.find_by_email(&req.email).await?.is_some() {
            return Err(AppError::conflict("E-mail already registered"));
        }

        self.validator.validate(&req.password)?;
        let password_hash = self.hash(req.password).await?;

        // The repository re-checks uniqueness atomically.
        let user = self
            .user_repo
            .insert(User::new(CreateUser {
                email: req.email,
                name: req.name,
                is_admin: req.is_admin,
                password_hash,
            }))
            .await?;

        info!(user_id = %user.id, is_admin = user.is_admin, "User registered");
        Ok(user)
    }

    /// Verifies an email/password pair and mints a session token.
    ///
    /// Unknown email, wrong password, and a corrupt stored hash all fail
    /// with the same [`AuthError::InvalidCredentials`].
    pub async fn login(&self, email: &str, password: &str) -> Result<String, AppError> {
        let Some(user) = self.user_repo.find_by_email(email).await? else {
            let hasher = Arc::clone(&self.hasher);
            let password = password.to_string();
            run_blocking(move || hasher.verify_dummy(&password)).await?;
            debug!("Login failed: unknown email");
            return Err(AuthError::InvalidCredentials.into());
        };

        let hasher = Arc::clone(&self.hasher);
        let password = password.to_string();
        let stored = user.password_hash.clone();
        let verdict = run_blocking(move || hasher.verify_password(&password, &stored)).await?;

        match verdict {
            Ok(true) => {}
            Ok(false) => {
                debug!(user_id = %user.id, "Login failed: wrong password");
                return Err(AuthError::InvalidCredentials.into());
            }
            Err(PasswordError::MalformedHash(reason)) => {
                warn!(user_id = %user.id, %reason, "Stored password hash is malformed");
                return Err(AuthError::InvalidCredentials.into());
            }
            Err(e) => {
                warn!(user_id = %user.id, error = %e, "Password verification failed");
                return Err(AuthError::InvalidCredentials.into());
            }
        }

        let token = self.encoder.mint(user.id, user.is_admin)?;
        info!(user_id = %user.id, "Session token issued");
        Ok(token)
    }

    /// Gets the caller's own account.
    pub async fn get_profile(&self, ctx: &RequestContext) -> Result<User, AppError> {
        self.user_repo
            .find_by_id(&ctx.user_id())
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Lists every account. Admin only.
    pub async fn list_users(&self, ctx: &RequestContext) -> Result<Vec<User>, AppError> {
        self.rbac.require_admin(&ctx.claims)?;
        self.user_repo.list_all().await
    }

    /// Updates an account. Allowed for its owner and for admins.
    ///
    /// Permission is checked before existence, so non-admins cannot learn
    /// whether other accounts exist.
    pub async fn update_user(
        &self,
        ctx: &RequestContext,
        id: UserId,
        req: UpdateUserRequest,
    ) -> Result<User, AppError> {
        self.rbac.authorize_owner(&ctx.claims, &id)?;

        if req.is_admin.is_some() {
            debug!(user_id = %id, "Ignoring administrator flag in update");
        }

        let password_hash = match req.password {
            Some(password) => {
                self.validator.validate(&password)?;
                Some(self.hash(password).await?)
            }
            None => None,
        };

        let user = self
            .user_repo
            .update(
                &id,
                UpdateUser {
                    email: req.email,
                    name: req.name,
                    password_hash,
                },
            )
            .await?;

        info!(user_id = %id, actor = %ctx.user_id(), "User updated");
        Ok(user)
    }

    /// Deletes an account. Allowed for its owner and for admins.
    pub async fn delete_user(&self, ctx: &RequestContext, id: UserId) -> Result<(), AppError> {
        self.rbac.authorize_owner(&ctx.claims, &id)?;

        if !self.user_repo.delete(&id).await? {
            return Err(AppError::not_found("User not found"));
        }

        info!(user_id = %id, actor = %ctx.user_id(), "User deleted");
        Ok(())
    }

    async fn hash(&self, password: String) -> Result<String, AppError> {
        let hasher = Arc::clone(&self.hasher);
        Ok(run_blocking(move || hasher.hash_password(&password)).await??)
    }
}

/// Runs CPU-bound password work off the async executor.
async fn run_blocking<T, F>(f: F) -> Result<T, AppError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| AppError::internal(format!("Password task failed: {e}")))
}
