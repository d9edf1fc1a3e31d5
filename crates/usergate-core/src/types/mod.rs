//! Core type definitions used across the UserGate workspace.

pub mod id;

pub use id::UserId;
