//! Convenience result type alias for UserGate.

use crate::error::AppError;

/// A specialized `Result` type for UserGate operations.
pub type AppResult<T> = Result<T, AppError>;
