//! Notification feed lifecycle and the overdue reminder sweep.

use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use campushub_core::error::AppError;
use campushub_core::result::AppResult;
use campushub_database::repositories::{
    EventRepository, NotificationRepository, ReminderRepository,
};
use campushub_entity::event::EventReminder;
use campushub_entity::notification::{NewNotification, Notification, NotificationKind};

use crate::context::RequestContext;
use crate::notification::builder::{EVENT_REMINDER_PREFIX, event_reminder_notification};
use crate::notification::link::extract_event_id;

/// Result of one overdue reminder sweep.
///
/// `processed` counts reminders that were both notified and marked sent;
/// every failure lands in `errors` with the reminder id attached, and the
/// sweep keeps going.
#[derive(Debug, Default, Serialize)]
pub struct ReminderSweepOutcome {
    /// Reminders fully converted into notifications.
    pub processed: u64,
    /// Per-reminder failure descriptions.
    pub errors: Vec<String>,
}

/// Manages the user notification feed and converts overdue reminders
/// into notifications.
#[derive(Clone)]
pub struct NotificationService {
    notifications: Arc<dyn NotificationRepository>,
    reminders: Arc<dyn ReminderRepository>,
    events: Arc<dyn EventRepository>,
}

impl NotificationService {
    /// Creates a new notification service.
    pub fn new(
        notifications: Arc<dyn NotificationRepository>,
        reminders: Arc<dyn ReminderRepository>,
        events: Arc<dyn EventRepository>,
    ) -> Self {
        Self {
            notifications,
            reminders,
            events,
        }
    }

    /// Creates a notification for a user.
    pub async fn create(
        &self,
        user_id: Uuid,
        notification: NewNotification,
    ) -> AppResult<Notification> {
        if notification.title.trim().is_empty() {
            return Err(AppError::validation("Notification title is required"));
        }
        if notification.message.trim().is_empty() {
            return Err(AppError::validation("Notification message is required"));
        }
        self.notifications.create(user_id, &notification).await
    }

    /// Lists the current user's notifications, hiding expired ones.
    pub async fn list(&self, ctx: &RequestContext) -> AppResult<Vec<Notification>> {
        let notifications = self.notifications.find_by_user(ctx.user_id).await?;
        Ok(drop_expired(notifications))
    }

    /// Lists the current user's unread notifications, hiding expired ones.
    pub async fn list_unread(&self, ctx: &RequestContext) -> AppResult<Vec<Notification>> {
        let notifications = self.notifications.find_unread(ctx.user_id).await?;
        Ok(drop_expired(notifications))
    }

    /// Gets the unread notification count.
    pub async fn unread_count(&self, ctx: &RequestContext) -> AppResult<i64> {
        self.notifications.count_unread(ctx.user_id).await
    }

    /// Marks one of the current user's notifications as read.
    pub async fn mark_read(&self, ctx: &RequestContext, notification_id: Uuid) -> AppResult<()> {
        self.owned(ctx, notification_id).await?;
        self.notifications.mark_read(notification_id).await
    }

    /// Marks all of the current user's notifications as read.
    pub async fn mark_all_read(&self, ctx: &RequestContext) -> AppResult<u64> {
        self.notifications.mark_all_read(ctx.user_id).await
    }

    /// Deletes one of the current user's notifications.
    ///
    /// Deleting an event-reminder notification also removes the backing
    /// reminder row, so the event cannot re-notify the user on a later
    /// sweep. The cleanup is best-effort; a failure is logged and the
    /// notification is deleted anyway.
    pub async fn delete(&self, ctx: &RequestContext, notification_id: Uuid) -> AppResult<()> {
        let notification = self.owned(ctx, notification_id).await?;

        if notification.kind == NotificationKind::Event
            && notification.title.starts_with(EVENT_REMINDER_PREFIX)
        {
            let event_id = notification
                .related_event_id
                .or_else(|| notification.action_url.as_deref().and_then(extract_event_id));
            match event_id {
                Some(event_id) => {
                    if let Err(e) = self
                        .reminders
                        .delete_by_event_and_user(event_id, ctx.user_id)
                        .await
                    {
                        warn!(
                            notification_id = %notification_id,
                            event_id = %event_id,
                            error = %e,
                            "reminder cleanup failed, deleting notification anyway"
                        );
                    }
                }
                None => {
                    warn!(
                        notification_id = %notification_id,
                        "reminder notification carries no event reference, skipping cleanup"
                    );
                }
            }
        }

        self.notifications.delete(notification_id).await
    }

    /// Converts every overdue, unsent reminder into a notification.
    ///
    /// Reminders are processed serially; one reminder's failure never
    /// aborts the sweep. A reminder only counts as processed once its
    /// notification exists and its `is_sent` flag is set, so a failure
    /// between the two steps leaves it eligible for the next sweep at the
    /// cost of a possible duplicate notification.
    pub async fn process_overdue_reminders(&self) -> AppResult<ReminderSweepOutcome> {
        let mut outcome = ReminderSweepOutcome::default();

        let due = match self.reminders.find_overdue(Utc::now()).await {
            Ok(due) => due,
            Err(e) => {
                outcome
                    .errors
                    .push(format!("failed to list overdue reminders: {e}"));
                return Ok(outcome);
            }
        };

        for reminder in due {
            match self.notify_reminder(&reminder).await {
                Ok(()) => outcome.processed += 1,
                Err(e) => {
                    warn!(reminder_id = %reminder.id, error = %e, "reminder processing failed");
                    outcome.errors.push(format!("reminder {}: {e}", reminder.id));
                }
            }
        }

        info!(
            processed = outcome.processed,
            failed = outcome.errors.len(),
            "overdue reminder sweep finished"
        );
        Ok(outcome)
    }

    async fn notify_reminder(&self, reminder: &EventReminder) -> AppResult<()> {
        let event = self
            .events
            .find_by_id(reminder.event_id)
            .await?
            .ok_or_else(|| AppError::not_found("Event not found"))?;
        self.create(reminder.user_id, event_reminder_notification(&event))
            .await?;
        self.reminders.mark_sent(reminder.id).await
    }

    async fn owned(&self, ctx: &RequestContext, notification_id: Uuid) -> AppResult<Notification> {
        let notification = self
            .notifications
            .find_by_id(notification_id)
            .await?
            .ok_or_else(|| AppError::not_found("Notification not found"))?;
        if notification.user_id != ctx.user_id {
            return Err(AppError::not_found("Notification not found"));
        }
        Ok(notification)
    }
}

fn drop_expired(notifications: Vec<Notification>) -> Vec<Notification> {
    notifications.into_iter().filter(|n| !n.is_expired()).collect()
}
