//! Core traits defined in `usergate-core` and implemented by other crates.

pub mod repository;

pub use repository::Repository;
