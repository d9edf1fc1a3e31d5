//! User registration, login, and account management.

pub mod service;

pub use service::{RegisterRequest, UpdateUserRequest, UserService};
