//! Event CRUD and reminder creation.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

use campushub_core::error::AppError;
use campushub_core::result::AppResult;
use campushub_database::repositories::{EventRepository, ReminderRepository};
use campushub_entity::event::{Event, EventPatch, EventReminder, EventType, NewEvent};

use crate::context::RequestContext;
use crate::notification::NotificationService;
use crate::notification::builder::event_reminder_notification;

/// Manages campus events and per-user event reminders.
#[derive(Clone)]
pub struct EventService {
    events: Arc<dyn EventRepository>,
    reminders: Arc<dyn ReminderRepository>,
    notifications: Arc<NotificationService>,
}

impl EventService {
    /// Creates a new event service. Companion notifications go through
    /// the notification service so its validation applies to them too.
    pub fn new(
        events: Arc<dyn EventRepository>,
        reminders: Arc<dyn ReminderRepository>,
        notifications: Arc<NotificationService>,
    ) -> Self {
        Self {
            events,
            reminders,
            notifications,
        }
    }

    /// Lists all events, including inactive ones.
    pub async fn list_all(&self) -> AppResult<Vec<Event>> {
        self.events.find_all().await
    }

    /// Lists currently visible events.
    pub async fn list_active(&self) -> AppResult<Vec<Event>> {
        self.events.find_active().await
    }

    /// Lists visible events of one posting kind.
    pub async fn list_by_type(&self, event_type: EventType) -> AppResult<Vec<Event>> {
        let events = self.events.find_active().await?;
        Ok(events
            .into_iter()
            .filter(|e| e.event_type == event_type)
            .collect())
    }

    /// Gets a single event by id.
    pub async fn get(&self, event_id: Uuid) -> AppResult<Event> {
        self.events
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::not_found("Event not found"))
    }

    /// Creates an event on behalf of the current admin.
    pub async fn create(&self, ctx: &RequestContext, event: NewEvent) -> AppResult<Event> {
        if event.title.trim().is_empty() {
            return Err(AppError::validation("Event title is required"));
        }
        if event.event_type == EventType::Event && event.event_date.is_none() {
            return Err(AppError::validation("Event date is required for events"));
        }
        let created = self.events.create(ctx.user_id, &event).await?;
        info!(event_id = %created.id, created_by = %ctx.user_id, "event created");
        Ok(created)
    }

    /// Applies a partial update to an event.
    pub async fn update(&self, event_id: Uuid, patch: EventPatch) -> AppResult<Event> {
        if patch.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err(AppError::validation("Event title cannot be blank"));
        }
        self.events.update(event_id, &patch).await
    }

    /// Shows or hides an event.
    pub async fn set_active(&self, event_id: Uuid, is_active: bool) -> AppResult<Event> {
        self.events.set_active(event_id, is_active).await
    }

    /// Deletes an event.
    pub async fn delete(&self, event_id: Uuid) -> AppResult<()> {
        if !self.events.delete(event_id).await? {
            return Err(AppError::not_found("Event not found"));
        }
        Ok(())
    }

    /// Creates a reminder for the current user.
    ///
    /// Preconditions are checked in order, each failing fast: the event id
    /// and reminder time must be present and well formed, the event must
    /// exist, and the user must not already hold a reminder for it. The
    /// companion notification is created after the reminder row; if that
    /// step fails the error surfaces to the caller but the reminder stays
    /// persisted.
    pub async fn create_reminder(
        &self,
        ctx: &RequestContext,
        event_id: Option<Uuid>,
        reminder_time: Option<&str>,
    ) -> AppResult<EventReminder> {
        let event_id =
            event_id.ok_or_else(|| AppError::validation("Event ID is required"))?;
        let raw_time = reminder_time
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| AppError::validation("Reminder time is required"))?;
        let reminder_time = parse_reminder_time(raw_time)?;

        let event = self
            .events
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::not_found("Event not found"))?;

        if self
            .reminders
            .find_by_user_and_event(ctx.user_id, event_id)
            .await?
            .is_some()
        {
            return Err(AppError::conflict(
                "A reminder for this event already exists",
            ));
        }

        let reminder = self
            .reminders
            .create(ctx.user_id, event_id, reminder_time)
            .await?;

        self.notifications
            .create(ctx.user_id, event_reminder_notification(&event))
            .await?;

        info!(user_id = %ctx.user_id, event_id = %event_id, "event reminder created");
        Ok(reminder)
    }

    /// Lists the current user's reminders.
    pub async fn list_reminders(&self, ctx: &RequestContext) -> AppResult<Vec<EventReminder>> {
        self.reminders.find_by_user(ctx.user_id).await
    }

    /// Finds the current user's reminder for an event, if any.
    pub async fn reminder_for_event(
        &self,
        ctx: &RequestContext,
        event_id: Uuid,
    ) -> AppResult<Option<EventReminder>> {
        self.reminders
            .find_by_user_and_event(ctx.user_id, event_id)
            .await
    }

    /// Deletes one of the current user's reminders.
    pub async fn delete_reminder(
        &self,
        ctx: &RequestContext,
        reminder_id: Uuid,
    ) -> AppResult<()> {
        let owned = self
            .reminders
            .find_by_user(ctx.user_id)
            .await?
            .into_iter()
            .any(|r| r.id == reminder_id);
        if !owned {
            return Err(AppError::not_found("Reminder not found"));
        }
        self.reminders.delete(reminder_id).await?;
        Ok(())
    }
}

fn parse_reminder_time(raw: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw.trim())
        .map(|t| t.with_timezone(&Utc))
        .map_err(|_| AppError::validation("Reminder time must be a valid RFC 3339 timestamp"))
}
