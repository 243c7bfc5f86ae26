//! Giveaway post and claim entity models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Lifecycle status of a giveaway post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "giveaway_status", rename_all = "snake_case")]
pub enum GiveawayStatus {
    /// Listed and claimable.
    Available,
    /// Claimed by another member.
    Claimed,
    /// Taken down by the giver.
    Removed,
}

impl GiveawayStatus {
    /// Return the status as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Claimed => "claimed",
            Self::Removed => "removed",
        }
    }
}

impl std::fmt::Display for GiveawayStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An item offered for free by a member.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct GiveawayPost {
    /// Unique giveaway identifier.
    pub id: Uuid,
    /// The member giving the item away.
    pub seller_id: Uuid,
    /// Giveaway title.
    pub title: String,
    /// Longer description, if any.
    pub description: Option<String>,
    /// Photo URL (upload handled by the blob-storage service).
    pub image_url: Option<String>,
    /// Current lifecycle status.
    pub status: GiveawayStatus,
    /// When the post was created.
    pub created_at: DateTime<Utc>,
    /// When the post was last modified.
    pub updated_at: DateTime<Utc>,
}

/// Fields for creating a new giveaway post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewGiveaway {
    /// Giveaway title.
    pub title: String,
    /// Longer description, if any.
    pub description: Option<String>,
    /// Photo URL.
    pub image_url: Option<String>,
}

/// A member's claim on a giveaway.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct GiveawayClaim {
    /// Unique claim identifier.
    pub id: Uuid,
    /// The giveaway claimed.
    pub giveaway_id: Uuid,
    /// The claiming member.
    pub claimer_id: Uuid,
    /// Claimer's contact phone number.
    pub claimer_phone_number: String,
    /// When the claim was made.
    pub claimed_at: DateTime<Utc>,
}

/// Fields for recording a new giveaway claim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewGiveawayClaim {
    /// The giveaway claimed.
    pub giveaway_id: Uuid,
    /// Claimer's contact phone number.
    pub claimer_phone_number: String,
}
