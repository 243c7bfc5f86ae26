//! Product listing repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use campushub_core::error::{AppError, ErrorKind};
use campushub_core::result::AppResult;
use campushub_entity::marketplace::{NewProduct, ProductListing, ProductPatch};

/// Repository for marketplace product listings.
#[async_trait]
pub trait ProductRepository: Send + Sync + 'static {
    /// List available products, optionally filtered by a title search and a
    /// maximum price, newest first.
    async fn find_available(
        &self,
        search: Option<&str>,
        max_price: Option<i64>,
    ) -> AppResult<Vec<ProductListing>>;

    /// List a seller's products regardless of status, newest first.
    async fn find_by_seller(&self, seller_id: Uuid) -> AppResult<Vec<ProductListing>>;

    /// Find a product by id.
    async fn find_by_id(&self, product_id: Uuid) -> AppResult<Option<ProductListing>>;

    /// Create a listing owned by the given seller.
    async fn create(&self, seller_id: Uuid, product: &NewProduct) -> AppResult<ProductListing>;

    /// Apply a partial update, bumping `updated_at`.
    async fn update(&self, product_id: Uuid, patch: &ProductPatch) -> AppResult<ProductListing>;

    /// Delete a listing. Returns `true` if a row was removed.
    async fn delete(&self, product_id: Uuid) -> AppResult<bool>;

    /// Atomically move an available product to sold. Returns `false` when
    /// the product was no longer available, so callers can detect a lost
    /// purchase race without a separate read.
    async fn mark_sold(&self, product_id: Uuid) -> AppResult<bool>;
}

/// Postgres-backed [`ProductRepository`].
#[derive(Debug, Clone)]
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    /// Create a new product repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn find_available(
        &self,
        search: Option<&str>,
        max_price: Option<i64>,
    ) -> AppResult<Vec<ProductListing>> {
        sqlx::query_as::<_, ProductListing>(
            "SELECT * FROM product_listings WHERE status = 'available' \
             AND ($1::TEXT IS NULL OR title ILIKE '%' || $1 || '%') \
             AND ($2::BIGINT IS NULL OR price <= $2) \
             ORDER BY created_at DESC",
        )
        .bind(search)
        .bind(max_price)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to fetch products", e))
    }

    async fn find_by_seller(&self, seller_id: Uuid) -> AppResult<Vec<ProductListing>> {
        sqlx::query_as::<_, ProductListing>(
            "SELECT * FROM product_listings WHERE seller_id = $1 ORDER BY created_at DESC",
        )
        .bind(seller_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to fetch seller products", e)
        })
    }

    async fn find_by_id(&self, product_id: Uuid) -> AppResult<Option<ProductListing>> {
        sqlx::query_as::<_, ProductListing>("SELECT * FROM product_listings WHERE id = $1")
            .bind(product_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to fetch product", e))
    }

    async fn create(&self, seller_id: Uuid, product: &NewProduct) -> AppResult<ProductListing> {
        sqlx::query_as::<_, ProductListing>(
            "INSERT INTO product_listings (seller_id, title, description, price, category, size, color, brand, image_url) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) RETURNING *",
        )
        .bind(seller_id)
        .bind(&product.title)
        .bind(&product.description)
        .bind(product.price)
        .bind(&product.category)
        .bind(&product.size)
        .bind(&product.color)
        .bind(&product.brand)
        .bind(&product.image_url)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create product", e))
    }

    async fn update(&self, product_id: Uuid, patch: &ProductPatch) -> AppResult<ProductListing> {
        sqlx::query_as::<_, ProductListing>(
            "UPDATE product_listings SET \
                title = COALESCE($2, title), \
                description = COALESCE($3, description), \
                price = COALESCE($4, price), \
                category = COALESCE($5, category), \
                size = COALESCE($6, size), \
                color = COALESCE($7, color), \
                brand = COALESCE($8, brand), \
                image_url = COALESCE($9, image_url), \
                updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(product_id)
        .bind(&patch.title)
        .bind(&patch.description)
        .bind(patch.price)
        .bind(&patch.category)
        .bind(&patch.size)
        .bind(&patch.color)
        .bind(&patch.brand)
        .bind(&patch.image_url)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update product", e))?
        .ok_or_else(|| AppError::not_found("Product not found"))
    }

    async fn delete(&self, product_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM product_listings WHERE id = $1")
            .bind(product_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete product", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    async fn mark_sold(&self, product_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE product_listings SET status = 'sold', updated_at = NOW() \
             WHERE id = $1 AND status = 'available'",
        )
        .bind(product_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to mark product as sold", e)
        })?;
        Ok(result.rows_affected() > 0)
    }
}
