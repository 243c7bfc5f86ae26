//! Seller inbox handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use campushub_entity::notification::SellerNotification;

use crate::dto::response::{ApiResponse, CountResponse, MessageResponse, UpdatedResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/seller-notifications
pub async fn list_inbox(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<SellerNotification>>>, ApiError> {
    let inbox = state.seller_notification_service.list(&auth).await?;
    Ok(Json(ApiResponse::ok(inbox)))
}

/// GET /api/seller-notifications/unread-count
pub async fn unread_count(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<CountResponse>>, ApiError> {
    let count = state
        .seller_notification_service
        .unread_count(&auth)
        .await?;
    Ok(Json(ApiResponse::ok(CountResponse { count })))
}

/// PUT /api/seller-notifications/{id}/read
pub async fn mark_read(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state
        .seller_notification_service
        .mark_read(&auth, id)
        .await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Marked as read"))))
}

/// PUT /api/seller-notifications/read-all
pub async fn mark_all_read(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<UpdatedResponse>>, ApiError> {
    let updated = state
        .seller_notification_service
        .mark_all_read(&auth)
        .await?;
    Ok(Json(ApiResponse::ok(UpdatedResponse { updated })))
}
