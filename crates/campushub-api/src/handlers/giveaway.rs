//! Giveaway handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use campushub_entity::marketplace::{GiveawayClaim, GiveawayPost};

use crate::dto::request::{ContactRequest, CreateGiveawayRequest, validated};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/giveaways
pub async fn list_giveaways(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<GiveawayPost>>>, ApiError> {
    let giveaways = state.giveaway_service.list_available().await?;
    Ok(Json(ApiResponse::ok(giveaways)))
}

/// GET /api/giveaways/mine
pub async fn my_giveaways(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<GiveawayPost>>>, ApiError> {
    let giveaways = state.giveaway_service.my_giveaways(&auth).await?;
    Ok(Json(ApiResponse::ok(giveaways)))
}

/// GET /api/giveaways/{id}
pub async fn get_giveaway(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<GiveawayPost>>, ApiError> {
    let giveaway = state.giveaway_service.get(id).await?;
    Ok(Json(ApiResponse::ok(giveaway)))
}

/// POST /api/giveaways
pub async fn create_giveaway(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<CreateGiveawayRequest>,
) -> Result<Json<ApiResponse<GiveawayPost>>, ApiError> {
    let body = validated(body)?;
    let giveaway = state.giveaway_service.create(&auth, body.into()).await?;
    Ok(Json(ApiResponse::ok(giveaway)))
}

/// DELETE /api/giveaways/{id}
pub async fn delete_giveaway(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.giveaway_service.delete(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Giveaway deleted",
    ))))
}

/// POST /api/giveaways/{id}/claim
pub async fn claim_giveaway(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(body): Json<ContactRequest>,
) -> Result<Json<ApiResponse<GiveawayClaim>>, ApiError> {
    let body = validated(body)?;
    let claim = state
        .giveaway_service
        .claim(&auth, id, &body.phone_number)
        .await?;
    Ok(Json(ApiResponse::ok(claim)))
}
