//! Product listing entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Lifecycle status of a product listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "product_status", rename_all = "snake_case")]
pub enum ProductStatus {
    /// Listed and purchasable.
    Available,
    /// Bought by another member.
    Sold,
    /// Taken down by the seller.
    Removed,
}

impl ProductStatus {
    /// Return the status as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Sold => "sold",
            Self::Removed => "removed",
        }
    }
}

impl std::fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A second-hand product listed for sale.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProductListing {
    /// Unique listing identifier.
    pub id: Uuid,
    /// The member selling the product.
    pub seller_id: Uuid,
    /// Listing title.
    pub title: String,
    /// Longer description, if any.
    pub description: Option<String>,
    /// Asking price in whole currency units.
    pub price: i64,
    /// Free-text category.
    pub category: Option<String>,
    /// Size label, if applicable.
    pub size: Option<String>,
    /// Color, if applicable.
    pub color: Option<String>,
    /// Brand, if applicable.
    pub brand: Option<String>,
    /// Photo URL (upload handled by the blob-storage service).
    pub image_url: Option<String>,
    /// Current lifecycle status.
    pub status: ProductStatus,
    /// When the listing was created.
    pub created_at: DateTime<Utc>,
    /// When the listing was last modified.
    pub updated_at: DateTime<Utc>,
}

/// Fields for creating a new product listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProduct {
    /// Listing title.
    pub title: String,
    /// Longer description, if any.
    pub description: Option<String>,
    /// Asking price in whole currency units.
    pub price: i64,
    /// Free-text category.
    pub category: Option<String>,
    /// Size label, if applicable.
    pub size: Option<String>,
    /// Color, if applicable.
    pub color: Option<String>,
    /// Brand, if applicable.
    pub brand: Option<String>,
    /// Photo URL.
    pub image_url: Option<String>,
}

/// Partial update for a product listing; `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductPatch {
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New asking price.
    pub price: Option<i64>,
    /// New category.
    pub category: Option<String>,
    /// New size label.
    pub size: Option<String>,
    /// New color.
    pub color: Option<String>,
    /// New brand.
    pub brand: Option<String>,
    /// New photo URL.
    pub image_url: Option<String>,
}
