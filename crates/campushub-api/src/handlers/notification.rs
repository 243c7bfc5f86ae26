//! Notification feed handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use campushub_entity::notification::Notification;

use crate::dto::request::{CreateNotificationRequest, validated};
use crate::dto::response::{ApiResponse, CountResponse, MessageResponse, UpdatedResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/notifications
pub async fn create_notification(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<CreateNotificationRequest>,
) -> Result<Json<ApiResponse<Notification>>, ApiError> {
    let body = validated(body)?;
    let notification = state
        .notification_service
        .create(auth.user_id, body.into())
        .await?;
    Ok(Json(ApiResponse::ok(notification)))
}

/// GET /api/notifications
pub async fn list_notifications(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<Notification>>>, ApiError> {
    let notifications = state.notification_service.list(&auth).await?;
    Ok(Json(ApiResponse::ok(notifications)))
}

/// GET /api/notifications/unread
pub async fn list_unread(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<Notification>>>, ApiError> {
    let notifications = state.notification_service.list_unread(&auth).await?;
    Ok(Json(ApiResponse::ok(notifications)))
}

/// GET /api/notifications/unread-count
pub async fn unread_count(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<CountResponse>>, ApiError> {
    let count = state.notification_service.unread_count(&auth).await?;
    Ok(Json(ApiResponse::ok(CountResponse { count })))
}

/// PUT /api/notifications/{id}/read
pub async fn mark_read(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.notification_service.mark_read(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Marked as read"))))
}

/// PUT /api/notifications/read-all
pub async fn mark_all_read(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<UpdatedResponse>>, ApiError> {
    let updated = state.notification_service.mark_all_read(&auth).await?;
    Ok(Json(ApiResponse::ok(UpdatedResponse { updated })))
}

/// DELETE /api/notifications/{id}
pub async fn delete_notification(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.notification_service.delete(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Notification deleted",
    ))))
}
