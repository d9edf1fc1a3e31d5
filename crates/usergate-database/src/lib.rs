//! # usergate-database
//!
//! Storage layer for UserGate. Services depend on the repository traits
//! declared here; the in-memory implementation backs the server binary
//! and the test suites.

pub mod repositories;
