//! Notification kind enumeration.

use serde::{Deserialize, Serialize};

/// Kind of a user-feed notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "notification_type", rename_all = "snake_case")]
pub enum NotificationKind {
    /// Study-room booking updates.
    StudyRoom,
    /// Campus event reminders.
    Event,
    /// Payment/transaction updates.
    Transaction,
    /// Food-order status updates.
    FoodOrder,
    /// Anything without a dedicated kind.
    General,
    /// Banner placement request updates.
    BannerRequest,
    /// Marketplace product purchases.
    ProductPurchase,
    /// Marketplace job applications.
    JobApplication,
}

impl NotificationKind {
    /// Return the kind as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StudyRoom => "study_room",
            Self::Event => "event",
            Self::Transaction => "transaction",
            Self::FoodOrder => "food_order",
            Self::General => "general",
            Self::BannerRequest => "banner_request",
            Self::ProductPurchase => "product_purchase",
            Self::JobApplication => "job_application",
        }
    }
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
