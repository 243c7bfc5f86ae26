//! User-facing types carried by bearer-token claims.
//!
//! Account records themselves live in the hosted identity service; only
//! the role enum crosses into this codebase.

pub mod role;

pub use role::UserRole;
