//! Event reminder entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A user's request to be reminded about an event.
///
/// At most one reminder exists per (user, event) pair. The overdue sweep
/// is the only writer of `is_sent`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EventReminder {
    /// Unique reminder identifier.
    pub id: Uuid,
    /// The user who asked to be reminded.
    pub user_id: Uuid,
    /// The event the reminder refers to.
    pub event_id: Uuid,
    /// When the reminder becomes due.
    pub reminder_time: DateTime<Utc>,
    /// Whether the sweep has already converted this reminder into a
    /// notification.
    pub is_sent: bool,
    /// When the reminder was created.
    pub created_at: DateTime<Utc>,
}
