//! Event reminder handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use campushub_entity::event::EventReminder;
use campushub_service::ReminderSweepOutcome;

use crate::dto::request::CreateReminderRequest;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/reminders
pub async fn create_reminder(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<CreateReminderRequest>,
) -> Result<Json<ApiResponse<EventReminder>>, ApiError> {
    let reminder = state
        .event_service
        .create_reminder(&auth, body.event_id, body.reminder_time.as_deref())
        .await?;
    Ok(Json(ApiResponse::ok(reminder)))
}

/// GET /api/reminders
pub async fn list_reminders(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<EventReminder>>>, ApiError> {
    let reminders = state.event_service.list_reminders(&auth).await?;
    Ok(Json(ApiResponse::ok(reminders)))
}

/// GET /api/reminders/event/{event_id}
///
/// The data field is `null` when the user holds no reminder for the
/// event.
pub async fn reminder_for_event(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(event_id): Path<Uuid>,
) -> Result<Json<ApiResponse<Option<EventReminder>>>, ApiError> {
    let reminder = state
        .event_service
        .reminder_for_event(&auth, event_id)
        .await?;
    Ok(Json(ApiResponse::ok(reminder)))
}

/// DELETE /api/reminders/{id}
pub async fn delete_reminder(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.event_service.delete_reminder(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Reminder deleted",
    ))))
}

/// POST /api/reminders/process-overdue
///
/// The sweep has no internal scheduler; an external trigger calls this
/// endpoint. Per-reminder failures are reported in the outcome rather
/// than failing the request.
pub async fn process_overdue(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<ApiResponse<ReminderSweepOutcome>>, ApiError> {
    let outcome = state.notification_service.process_overdue_reminders().await?;
    Ok(Json(ApiResponse::ok(outcome)))
}
