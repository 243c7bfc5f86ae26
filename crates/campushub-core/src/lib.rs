//! Core configuration, types, and error handling for CampusHub.
//!
//! Every other crate in the workspace depends on this one for the unified
//! [`error::AppError`] type and the configuration schemas.

pub mod config;
pub mod error;
pub mod result;
