//! Job post handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use campushub_entity::marketplace::{JobApplication, JobPost};

use crate::dto::request::{ContactRequest, CreateJobRequest, validated};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/jobs
pub async fn list_jobs(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<JobPost>>>, ApiError> {
    let jobs = state.marketplace_service.list_jobs().await?;
    Ok(Json(ApiResponse::ok(jobs)))
}

/// GET /api/jobs/mine
pub async fn my_jobs(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<JobPost>>>, ApiError> {
    let jobs = state.marketplace_service.my_jobs(&auth).await?;
    Ok(Json(ApiResponse::ok(jobs)))
}

/// GET /api/jobs/{id}
pub async fn get_job(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<JobPost>>, ApiError> {
    let job = state.marketplace_service.get_job(id).await?;
    Ok(Json(ApiResponse::ok(job)))
}

/// POST /api/jobs
pub async fn create_job(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<CreateJobRequest>,
) -> Result<Json<ApiResponse<JobPost>>, ApiError> {
    let body = validated(body)?;
    let job = state.marketplace_service.create_job(&auth, body.into()).await?;
    Ok(Json(ApiResponse::ok(job)))
}

/// DELETE /api/jobs/{id}
pub async fn delete_job(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.marketplace_service.delete_job(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Job deleted"))))
}

/// POST /api/jobs/{id}/apply
pub async fn apply_to_job(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(body): Json<ContactRequest>,
) -> Result<Json<ApiResponse<JobApplication>>, ApiError> {
    let body = validated(body)?;
    let application = state
        .marketplace_service
        .apply_to_job(&auth, id, &body.phone_number)
        .await?;
    Ok(Json(ApiResponse::ok(application)))
}
