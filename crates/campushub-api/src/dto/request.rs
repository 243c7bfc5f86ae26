//! Request DTOs.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use campushub_core::error::AppError;
use campushub_entity::event::{EventPatch, EventType, NewEvent};
use campushub_entity::marketplace::{NewGiveaway, NewJob, NewProduct, ProductPatch};
use campushub_entity::notification::{NewNotification, NotificationKind};

/// Runs `validator` checks and maps failures to a validation error.
pub fn validated<T: Validate>(body: T) -> Result<T, AppError> {
    body.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;
    Ok(body)
}

/// Body for POST /api/events.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateEventRequest {
    /// Event title.
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    /// Longer description.
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

impl From<CreateEventRequest> for NewEvent {
    fn from(req: CreateEventRequest) -> Self {
        NewEvent {
            title: req.title,
            description: req.description,
            event_type: req.event_type,
            event_date: req.event_date,
            location: req.location,
            image_url: req.image_url,
        }
    }
}

/// Body for PUT /api/events/{id}. Absent fields are left untouched.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateEventRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub event_type: Option<EventType>,
    pub event_date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
}

impl From<UpdateEventRequest> for EventPatch {
    fn from(req: UpdateEventRequest) -> Self {
        EventPatch {
            title: req.title,
            description: req.description,
            event_type: req.event_type,
            event_date: req.event_date,
            location: req.location,
            image_url: req.image_url,
            is_active: req.is_active,
        }
    }
}

/// Body for PUT /api/events/{id}/active.
#[derive(Debug, Deserialize)]
pub struct SetActiveRequest {
    /// New visibility flag.
    pub is_active: bool,
}

/// Query parameters for GET /api/events.
#[derive(Debug, Default, Deserialize)]
pub struct EventListQuery {
    /// Restrict to one posting kind.
    #[serde(rename = "type")]
    pub event_type: Option<EventType>,
}

/// Body for POST /api/reminders.
///
/// Both fields are optional on the wire so the service can report a
/// distinct validation error for each missing one.
#[derive(Debug, Deserialize)]
pub struct CreateReminderRequest {
    /// The event to be reminded about.
    pub event_id: Option<Uuid>,
    /// When to fire, as an RFC 3339 timestamp.
    pub reminder_time: Option<String>,
}

/// Body for POST /api/notifications.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateNotificationRequest {
    /// Notification title.
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    /// Notification body text.
    #[validate(length(min = 1))]
    pub message: String,
    /// Notification kind; defaults to `general`.
    #[serde(default = "default_notification_kind")]
    pub kind: NotificationKind,
    /// Link target for the notification.
    pub action_url: Option<String>,
    /// The event this notification refers to, if any.
    pub related_event_id: Option<Uuid>,
    /// When the notification stops being shown.
    pub expires_at: Option<DateTime<Utc>>,
}

fn default_notification_kind() -> NotificationKind {
    NotificationKind::General
}

impl From<CreateNotificationRequest> for NewNotification {
    fn from(req: CreateNotificationRequest) -> Self {
        NewNotification {
            title: req.title,
            message: req.message,
            kind: req.kind,
            action_url: req.action_url,
            related_event_id: req.related_event_id,
            expires_at: req.expires_at,
        }
    }
}

/// Query parameters for GET /api/products.
#[derive(Debug, Default, Deserialize)]
pub struct ProductListQuery {
    /// Case-insensitive title search.
    pub search: Option<String>,
    /// Upper price bound.
    pub max_price: Option<i64>,
}

/// Body for POST /api/products.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateProductRequest {
    /// Listing title.
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    pub description: Option<String>,
    /// Asking price in whole currency units.
    #[validate(range(min = 1))]
    pub price: i64,
    pub category: Option<String>,
    pub size: Option<String>,
    pub color: Option<String>,
    pub brand: Option<String>,
    pub image_url: Option<String>,
}

impl From<CreateProductRequest> for NewProduct {
    fn from(req: CreateProductRequest) -> Self {
        NewProduct {
            title: req.title,
            description: req.description,
            price: req.price,
            category: req.category,
            size: req.size,
            color: req.color,
            brand: req.brand,
            image_url: req.image_url,
        }
    }
}

/// Body for PUT /api/products/{id}. Absent fields are left untouched.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateProductRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<i64>,
    pub category: Option<String>,
    pub size: Option<String>,
    pub color: Option<String>,
    pub brand: Option<String>,
    pub image_url: Option<String>,
}

impl From<UpdateProductRequest> for ProductPatch {
    fn from(req: UpdateProductRequest) -> Self {
        ProductPatch {
            title: req.title,
            description: req.description,
            price: req.price,
            category: req.category,
            size: req.size,
            color: req.color,
            brand: req.brand,
            image_url: req.image_url,
        }
    }
}

/// Body for the purchase, job-application, and giveaway-claim endpoints.
#[derive(Debug, Deserialize, Validate)]
pub struct ContactRequest {
    /// Contact phone number passed to the counterparty.
    #[validate(length(min = 1, max = 32))]
    pub phone_number: String,
}

/// Body for POST /api/jobs.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateJobRequest {
    /// Job title.
    #[validate(length(min = 1, max = 200))]
    pub job_title: String,
    /// Job description text.
    #[validate(length(min = 1))]
    pub job_description: String,
    /// Offered salary, if stated.
    pub salary: Option<i64>,
}

impl From<CreateJobRequest> for NewJob {
    fn from(req: CreateJobRequest) -> Self {
        NewJob {
            job_title: req.job_title,
            job_description: req.job_description,
            salary: req.salary,
        }
    }
}

/// Body for POST /api/giveaways.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateGiveawayRequest {
    /// Giveaway title.
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

impl From<CreateGiveawayRequest> for NewGiveaway {
    fn from(req: CreateGiveawayRequest) -> Self {
        NewGiveaway {
            title: req.title,
            description: req.description,
            image_url: req.image_url,
        }
    }
}
