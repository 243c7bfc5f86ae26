//! Wishlist repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use campushub_core::error::{AppError, ErrorKind};
use campushub_core::result::AppResult;
use campushub_entity::marketplace::{ProductListing, WishlistItem};

/// Repository for per-user product wishlists.
#[async_trait]
pub trait WishlistRepository: Send + Sync + 'static {
    /// List a user's wishlist entries, newest first.
    async fn find_by_user(&self, user_id: Uuid) -> AppResult<Vec<WishlistItem>>;

    /// List the product listings on a user's wishlist, newest saved first.
    async fn find_products_by_user(&self, user_id: Uuid) -> AppResult<Vec<ProductListing>>;

    /// Add a product to a user's wishlist. A duplicate entry is a Conflict.
    async fn add(&self, user_id: Uuid, product_id: Uuid) -> AppResult<WishlistItem>;

    /// Remove a product from a user's wishlist. Returns `true` if a row was
    /// removed.
    async fn remove(&self, user_id: Uuid, product_id: Uuid) -> AppResult<bool>;

    /// Check whether a product is on a user's wishlist.
    async fn contains(&self, user_id: Uuid, product_id: Uuid) -> AppResult<bool>;
}

/// Postgres-backed [`WishlistRepository`].
#[derive(Debug, Clone)]
pub struct PgWishlistRepository {
    pool: PgPool,
}

impl PgWishlistRepository {
    /// Create a new wishlist repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WishlistRepository for PgWishlistRepository {
    async fn find_by_user(&self, user_id: Uuid) -> AppResult<Vec<WishlistItem>> {
        sqlx::query_as::<_, WishlistItem>(
            "SELECT * FROM wishlist_items WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to fetch wishlist", e))
    }

    async fn find_products_by_user(&self, user_id: Uuid) -> AppResult<Vec<ProductListing>> {
        sqlx::query_as::<_, ProductListing>(
            "SELECT p.* FROM product_listings p \
             JOIN wishlist_items w ON w.product_id = p.id \
             WHERE w.user_id = $1 ORDER BY w.created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to fetch wishlist products", e)
        })
    }

    async fn add(&self, user_id: Uuid, product_id: Uuid) -> AppResult<WishlistItem> {
        sqlx::query_as::<_, WishlistItem>(
            "INSERT INTO wishlist_items (user_id, product_id) VALUES ($1, $2) RETURNING *",
        )
        .bind(user_id)
        .bind(product_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::conflict("Product is already on the wishlist")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to add wishlist item", e),
        })
    }

    async fn remove(&self, user_id: Uuid, product_id: Uuid) -> AppResult<bool> {
        let result =
            sqlx::query("DELETE FROM wishlist_items WHERE user_id = $1 AND product_id = $2")
                .bind(user_id)
                .bind(product_id)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to remove wishlist item", e)
                })?;
        Ok(result.rows_affected() > 0)
    }

    async fn contains(&self, user_id: Uuid, product_id: Uuid) -> AppResult<bool> {
        sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM wishlist_items WHERE user_id = $1 AND product_id = $2)",
        )
        .bind(user_id)
        .bind(product_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to check wishlist", e))
    }
}
