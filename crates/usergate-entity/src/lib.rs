//! # usergate-entity
//!
//! Domain entity models for UserGate. Every struct in this crate is either
//! a stored record or the input used to create or modify one.

pub mod user;
