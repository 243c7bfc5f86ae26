//! Purchase history entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Settlement status of a purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "purchase_status", rename_all = "snake_case")]
pub enum PurchaseStatus {
    /// Finalized purchase.
    Completed,
    /// Awaiting handover.
    Pending,
    /// Cancelled by either party.
    Cancelled,
}

impl PurchaseStatus {
    /// Return the status as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Pending => "pending",
            Self::Cancelled => "cancelled",
        }
    }
}

/// A recorded product purchase.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PurchaseHistory {
    /// Unique purchase identifier.
    pub id: Uuid,
    /// The buying member.
    pub buyer_id: Uuid,
    /// The product bought.
    pub product_id: Uuid,
    /// Price paid, captured from the listing at purchase time.
    pub price: i64,
    /// Buyer's contact phone number.
    pub phone_number: String,
    /// Settlement status.
    pub status: PurchaseStatus,
    /// When the purchase was made.
    pub purchase_date: DateTime<Utc>,
}

/// Fields for recording a new purchase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPurchase {
    /// The product bought.
    pub product_id: Uuid,
    /// Price paid.
    pub price: i64,
    /// Buyer's contact phone number.
    pub phone_number: String,
}
