//! Access decisions derived from verified session claims.

pub mod enforcer;

pub use enforcer::RbacEnforcer;
