//! Wishlist entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A product saved to a member's wishlist.
///
/// At most one entry exists per (user, product) pair.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct WishlistItem {
    /// Unique wishlist entry identifier.
    pub id: Uuid,
    /// The member who saved the product.
    pub user_id: Uuid,
    /// The saved product.
    pub product_id: Uuid,
    /// When the product was saved.
    pub created_at: DateTime<Utc>,
}
