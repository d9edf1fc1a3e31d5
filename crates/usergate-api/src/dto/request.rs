//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use usergate_core::error::AppError;
use usergate_service::user::{RegisterRequest, UpdateUserRequest};

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// Email address.
    #[validate(email(message = "Invalid e-mail"))]
    pub email: String,
    /// Display name.
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// Administrator flag.
    #[serde(default, alias = "isAdm")]
    pub is_admin: bool,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl From<CreateUserRequest> for RegisterRequest {
    fn from(req: CreateUserRequest) -> Self {
        Self {
            email: req.email,
            name: req.name,
            is_admin: req.is_admin,
            password: req.password,
        }
    }
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Email address.
    pub email: String,
    /// Password.
    pub password: String,
}

/// Partial account update body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct PatchUserRequest {
    /// New email.
    #[validate(email(message = "Invalid e-mail"))]
    pub email: Option<String>,
    /// New display name.
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: Option<String>,
    /// New password.
    #[validate(length(min = 1, message = "Password must not be empty"))]
    pub password: Option<String>,
    /// Ignored by the service.
    #[serde(default, alias = "isAdm")]
    pub is_admin: Option<bool>,
}

impl From<PatchUserRequest> for UpdateUserRequest {
    fn from(req: PatchUserRequest) -> Self {
        Self {
            email: req.email,
            name: req.name,
            password: req.password,
            is_admin: req.is_admin,
        }
    }
}

/// Runs `validator` rules and converts failures to a 400.
pub fn validated<T: Validate>(req: T) -> Result<T, AppError> {
    req.validate().map_err(validation_error)?;
    Ok(req)
}

fn validation_error(errors: ValidationErrors) -> AppError {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(msg) => msg.to_string(),
                None => format!("Invalid {field}"),
            })
        })
        .collect();
    messages.sort();
    AppError::validation(messages.join("; "))
}
