//! Giveaway repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use campushub_core::error::{AppError, ErrorKind};
use campushub_core::result::AppResult;
use campushub_entity::marketplace::{GiveawayClaim, GiveawayPost, NewGiveaway, NewGiveawayClaim};

/// Repository for giveaway posts and claims.
#[async_trait]
pub trait GiveawayRepository: Send + Sync + 'static {
    /// Create a giveaway owned by the given seller.
    async fn create(&self, seller_id: Uuid, giveaway: &NewGiveaway) -> AppResult<GiveawayPost>;

    /// List a seller's giveaways, newest first.
    async fn find_by_seller(&self, seller_id: Uuid) -> AppResult<Vec<GiveawayPost>>;

    /// List unclaimed giveaways, newest first.
    async fn find_available(&self) -> AppResult<Vec<GiveawayPost>>;

    /// Find a giveaway by id.
    async fn find_by_id(&self, giveaway_id: Uuid) -> AppResult<Option<GiveawayPost>>;

    /// Delete a giveaway. Returns `true` if a row was removed.
    async fn delete(&self, giveaway_id: Uuid) -> AppResult<bool>;

    /// Atomically move an available giveaway to claimed. Returns `false`
    /// when the giveaway was no longer available.
    async fn mark_claimed(&self, giveaway_id: Uuid) -> AppResult<bool>;

    /// Record a claim against a giveaway.
    async fn create_claim(
        &self,
        claimer_id: Uuid,
        claim: &NewGiveawayClaim,
    ) -> AppResult<GiveawayClaim>;
}

/// Postgres-backed [`GiveawayRepository`].
#[derive(Debug, Clone)]
pub struct PgGiveawayRepository {
    pool: PgPool,
}

impl PgGiveawayRepository {
    /// Create a new giveaway repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GiveawayRepository for PgGiveawayRepository {
    async fn create(&self, seller_id: Uuid, giveaway: &NewGiveaway) -> AppResult<GiveawayPost> {
        sqlx::query_as::<_, GiveawayPost>(
            "INSERT INTO giveaway_posts (seller_id, title, description, image_url) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(seller_id)
        .bind(&giveaway.title)
        .bind(&giveaway.description)
        .bind(&giveaway.image_url)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create giveaway", e))
    }

    async fn find_by_seller(&self, seller_id: Uuid) -> AppResult<Vec<GiveawayPost>> {
        sqlx::query_as::<_, GiveawayPost>(
            "SELECT * FROM giveaway_posts WHERE seller_id = $1 ORDER BY created_at DESC",
        )
        .bind(seller_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to fetch seller giveaways", e)
        })
    }

    async fn find_available(&self) -> AppResult<Vec<GiveawayPost>> {
        sqlx::query_as::<_, GiveawayPost>(
            "SELECT * FROM giveaway_posts WHERE status = 'available' ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to fetch giveaways", e))
    }

    async fn find_by_id(&self, giveaway_id: Uuid) -> AppResult<Option<GiveawayPost>> {
        sqlx::query_as::<_, GiveawayPost>("SELECT * FROM giveaway_posts WHERE id = $1")
            .bind(giveaway_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to fetch giveaway", e))
    }

    async fn delete(&self, giveaway_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM giveaway_posts WHERE id = $1")
            .bind(giveaway_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete giveaway", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    async fn mark_claimed(&self, giveaway_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE giveaway_posts SET status = 'claimed', updated_at = NOW() \
             WHERE id = $1 AND status = 'available'",
        )
        .bind(giveaway_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to mark giveaway as claimed", e)
        })?;
        Ok(result.rows_affected() > 0)
    }

    async fn create_claim(
        &self,
        claimer_id: Uuid,
        claim: &NewGiveawayClaim,
    ) -> AppResult<GiveawayClaim> {
        sqlx::query_as::<_, GiveawayClaim>(
            "INSERT INTO giveaway_claims (giveaway_id, claimer_id, claimer_phone_number) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(claim.giveaway_id)
        .bind(claimer_id)
        .bind(&claim.claimer_phone_number)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to record giveaway claim", e)
        })
    }
}
