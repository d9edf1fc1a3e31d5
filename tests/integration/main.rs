//! HTTP integration tests driving the full router.

mod helpers;
mod user_test;
