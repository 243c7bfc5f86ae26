//! Notification entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::kind::NotificationKind;

/// A notification in a user's feed.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Notification {
    /// Unique notification identifier.
    pub id: Uuid,
    /// The recipient user.
    pub user_id: Uuid,
    /// Notification title.
    pub title: String,
    /// Notification body text.
    pub message: String,
    /// Notification kind.
    pub kind: NotificationKind,
    /// Whether the user has read this notification.
    pub is_read: bool,
    /// Link target for the notification, if any.
    pub action_url: Option<String>,
    /// The event this notification refers to, written at creation time.
    /// Older rows carry the id only as an `eventId=` marker inside
    /// `action_url`.
    pub related_event_id: Option<Uuid>,
    /// When the notification stops being shown.
    pub expires_at: Option<DateTime<Utc>>,
    /// When the notification was created.
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Check if the notification has expired.
    pub fn is_expired(&self) -> bool {
        self.expires_at
            .map(|exp| exp <= Utc::now())
            .unwrap_or(false)
    }
}

/// Fields for creating a new notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewNotification {
    /// Notification title.
    pub title: String,
    /// Notification body text.
    pub message: String,
    /// Notification kind.
    pub kind: NotificationKind,
    /// Link target for the notification, if any.
    pub action_url: Option<String>,
    /// The event this notification refers to, if any.
    pub related_event_id: Option<Uuid>,
    /// When the notification stops being shown.
    pub expires_at: Option<DateTime<Utc>>,
}
