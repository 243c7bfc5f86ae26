//! Seller notification entity model.
//!
//! Created exclusively as a side effect of purchase, job-application, and
//! giveaway-claim workflows; owned by the seller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Kind of a seller-inbox notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "seller_notification_type", rename_all = "snake_case")]
pub enum SellerNotificationKind {
    /// One of the seller's products was purchased.
    ProductPurchase,
    /// Someone applied to the seller's job post.
    JobApplication,
    /// One of the seller's giveaways was claimed.
    GiveawayClaim,
    /// Anything without a dedicated kind.
    General,
}

impl SellerNotificationKind {
    /// Return the kind as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProductPurchase => "product_purchase",
            Self::JobApplication => "job_application",
            Self::GiveawayClaim => "giveaway_claim",
            Self::General => "general",
        }
    }
}

impl std::fmt::Display for SellerNotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A notification in a seller's marketplace inbox.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SellerNotification {
    /// Unique notification identifier.
    pub id: Uuid,
    /// The seller this notification belongs to.
    pub user_id: Uuid,
    /// Notification title.
    pub title: String,
    /// Notification body text.
    pub message: String,
    /// Notification kind.
    pub kind: SellerNotificationKind,
    /// Whether the seller has read this notification.
    pub is_read: bool,
    /// Link target for the notification, if any.
    pub action_url: Option<String>,
    /// The product involved, if any.
    pub product_id: Option<Uuid>,
    /// The job post involved, if any.
    pub job_id: Option<Uuid>,
    /// When the notification was created.
    pub created_at: DateTime<Utc>,
}

/// Fields for creating a new seller notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSellerNotification {
    /// The seller to notify.
    pub user_id: Uuid,
    /// Notification title.
    pub title: String,
    /// Notification body text.
    pub message: String,
    /// Notification kind.
    pub kind: SellerNotificationKind,
    /// Link target for the notification, if any.
    pub action_url: Option<String>,
    /// The product involved, if any.
    pub product_id: Option<Uuid>,
    /// The job post involved, if any.
    pub job_id: Option<Uuid>,
}
