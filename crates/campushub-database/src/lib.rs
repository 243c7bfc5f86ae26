//! Database connection management and repository implementations for
//! CampusHub.
//!
//! Repositories are defined as traits so services receive their
//! persistence handle by injection; the Postgres implementations live
//! alongside each trait. "No row" lookups surface as `None`, never as an
//! error; every sqlx failure is wrapped into
//! [`campushub_core::error::ErrorKind::Database`].

pub mod connection;
pub mod migration;
pub mod repositories;
