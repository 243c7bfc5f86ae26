//! # campushub-api
//!
//! HTTP API layer for CampusHub. Defines the Axum router, request and
//! response DTOs, the bearer-token extractor, and the handlers that adapt
//! service results into the uniform `{success, data|error}` envelope.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
