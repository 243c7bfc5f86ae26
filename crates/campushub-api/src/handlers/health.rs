//! Health check handler.

use axum::Json;
use serde::Serialize;

use crate::dto::response::ApiResponse;

/// Health payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Liveness marker.
    pub status: &'static str,
    /// Crate version.
    pub version: &'static str,
}

/// GET /api/health
pub async fn health() -> Json<ApiResponse<HealthResponse>> {
    Json(ApiResponse::ok(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    }))
}
