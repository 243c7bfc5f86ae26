//! Purchase history repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use campushub_core::error::{AppError, ErrorKind};
use campushub_core::result::AppResult;
use campushub_entity::marketplace::{NewPurchase, PurchaseHistory};

/// Repository for completed purchase records.
#[async_trait]
pub trait PurchaseRepository: Send + Sync + 'static {
    /// Record a purchase made by the given buyer.
    async fn create(&self, buyer_id: Uuid, purchase: &NewPurchase) -> AppResult<PurchaseHistory>;

    /// List a buyer's purchases, newest first.
    async fn find_by_buyer(&self, buyer_id: Uuid) -> AppResult<Vec<PurchaseHistory>>;
}

/// Postgres-backed [`PurchaseRepository`].
#[derive(Debug, Clone)]
pub struct PgPurchaseRepository {
    pool: PgPool,
}

impl PgPurchaseRepository {
    /// Create a new purchase repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PurchaseRepository for PgPurchaseRepository {
    async fn create(&self, buyer_id: Uuid, purchase: &NewPurchase) -> AppResult<PurchaseHistory> {
        sqlx::query_as::<_, PurchaseHistory>(
            "INSERT INTO purchase_history (buyer_id, product_id, price, phone_number) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(buyer_id)
        .bind(purchase.product_id)
        .bind(purchase.price)
        .bind(&purchase.phone_number)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to record purchase", e))
    }

    async fn find_by_buyer(&self, buyer_id: Uuid) -> AppResult<Vec<PurchaseHistory>> {
        sqlx::query_as::<_, PurchaseHistory>(
            "SELECT * FROM purchase_history WHERE buyer_id = $1 ORDER BY purchase_date DESC",
        )
        .bind(buyer_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to fetch purchase history", e)
        })
    }
}
