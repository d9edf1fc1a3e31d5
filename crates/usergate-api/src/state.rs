//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use usergate_auth::jwt::{JwtDecoder, JwtEncoder};
use usergate_auth::password::{PasswordHasher, PasswordValidator};
use usergate_auth::rbac::RbacEnforcer;
use usergate_core::config::AppConfig;
use usergate_database::repositories::UserRepository;
use usergate_service::user::UserService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// Shared fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Session token verifier
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Account use cases
    pub user_service: Arc<UserService>,
    /// Self-or-admin checks that must run before body validation
    pub rbac: RbacEnforcer,
}

impl AppState {
    /// Wires the auth components and services around a user repository.
    pub fn new(
        config: AppConfig,
        user_repo: Arc<dyn UserRepository>,
        password_hasher: Arc<PasswordHasher>,
    ) -> Self {
        let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
        let password_validator = Arc::new(PasswordValidator::new(&config.auth));

        let user_service = Arc::new(UserService::new(
            user_repo,
            password_hasher,
            password_validator,
            jwt_encoder,
        ));

        Self {
            config: Arc::new(config),
            jwt_decoder,
            user_service,
            rbac: RbacEnforcer::new(),
        }
    }
}
