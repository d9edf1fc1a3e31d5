//! Repository traits and implementations, one module per entity.

pub mod user;

pub use user::{MemoryUserRepository, UserRepository};
