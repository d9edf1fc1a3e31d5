//! # usergate-core
//!
//! Core crate for UserGate. Contains the unified error system, configuration
//! schemas, typed identifiers, and the repository trait the rest of the
//! workspace is written against.
//!
//! This crate has **no** internal dependencies on other UserGate crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
