//! Event entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Kind of a campus event posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "event_type", rename_all = "snake_case")]
pub enum EventType {
    /// A dated campus event.
    Event,
    /// A promotional ad slot.
    Ad,
    /// A general announcement.
    Announcement,
}

impl EventType {
    /// Return the type as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Event => "event",
            Self::Ad => "ad",
            Self::Announcement => "announcement",
        }
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A campus event, ad, or announcement posted by an admin.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Event {
    /// Unique event identifier.
    pub id: Uuid,
    /// Event title.
    pub title: String,
    /// Longer description, if any.
    pub description: Option<String>,
    /// Posting kind.
    pub event_type: EventType,
    /// When the event takes place (absent for ads/announcements).
    pub event_date: Option<DateTime<Utc>>,
    /// Venue or location text.
    pub location: Option<String>,
    /// Cover image URL (upload handled by the blob-storage service).
    pub image_url: Option<String>,
    /// The admin who created the posting.
    pub created_by: Uuid,
    /// Whether the posting is currently visible.
    pub is_active: bool,
    /// When the posting was created.
    pub created_at: DateTime<Utc>,
    /// When the posting was last modified.
    pub updated_at: DateTime<Utc>,
}

/// Fields for creating a new event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEvent {
    /// Event title.
    pub title: String,
    /// Longer description, if any.
    pub description: Option<String>,
    /// Posting kind.
    pub event_type: EventType,
    /// When the event takes place.
    pub event_date: Option<DateTime<Utc>>,
    /// Venue or location text.
    pub location: Option<String>,
    /// Cover image URL.
    pub image_url: Option<String>,
}

/// Partial update for an event; `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventPatch {
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New posting kind.
    pub event_type: Option<EventType>,
    /// New event date.
    pub event_date: Option<DateTime<Utc>>,
    /// New location text.
    pub location: Option<String>,
    /// New cover image URL.
    pub image_url: Option<String>,
    /// New visibility flag.
    pub is_active: Option<bool>,
}
