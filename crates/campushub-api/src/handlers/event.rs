//! Event handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use campushub_entity::event::Event;

use crate::dto::request::{
    CreateEventRequest, EventListQuery, SetActiveRequest, UpdateEventRequest, validated,
};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::handlers::require_admin;
use crate::state::AppState;

/// GET /api/events
pub async fn list_events(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<EventListQuery>,
) -> Result<Json<ApiResponse<Vec<Event>>>, ApiError> {
    let events = match query.event_type {
        Some(event_type) => state.event_service.list_by_type(event_type).await?,
        None => state.event_service.list_active().await?,
    };
    Ok(Json(ApiResponse::ok(events)))
}

/// GET /api/events/all
pub async fn list_all_events(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<Event>>>, ApiError> {
    require_admin(&auth)?;
    let events = state.event_service.list_all().await?;
    Ok(Json(ApiResponse::ok(events)))
}

/// GET /api/events/{id}
pub async fn get_event(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Event>>, ApiError> {
    let event = state.event_service.get(id).await?;
    Ok(Json(ApiResponse::ok(event)))
}

/// POST /api/events
pub async fn create_event(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<CreateEventRequest>,
) -> Result<Json<ApiResponse<Event>>, ApiError> {
    require_admin(&auth)?;
    let body = validated(body)?;
    let event = state.event_service.create(&auth, body.into()).await?;
    Ok(Json(ApiResponse::ok(event)))
}

/// PUT /api/events/{id}
pub async fn update_event(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateEventRequest>,
) -> Result<Json<ApiResponse<Event>>, ApiError> {
    require_admin(&auth)?;
    let event = state.event_service.update(id, body.into()).await?;
    Ok(Json(ApiResponse::ok(event)))
}

/// PUT /api/events/{id}/active
pub async fn set_event_active(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(body): Json<SetActiveRequest>,
) -> Result<Json<ApiResponse<Event>>, ApiError> {
    require_admin(&auth)?;
    let event = state.event_service.set_active(id, body.is_active).await?;
    Ok(Json(ApiResponse::ok(event)))
}

/// DELETE /api/events/{id}
pub async fn delete_event(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    require_admin(&auth)?;
    state.event_service.delete(id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Event deleted"))))
}
