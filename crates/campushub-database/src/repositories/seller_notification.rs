//! Seller notification repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use campushub_core::error::{AppError, ErrorKind};
use campushub_core::result::AppResult;
use campushub_entity::notification::{NewSellerNotification, SellerNotification};

/// Repository for the seller marketplace inbox. `create` is the shared
/// delivery primitive behind every fan-out workflow.
#[async_trait]
pub trait SellerNotificationRepository: Send + Sync + 'static {
    /// Create a seller notification.
    async fn create(&self, notification: &NewSellerNotification) -> AppResult<SellerNotification>;

    /// List a seller's notifications, newest first.
    async fn find_by_user(&self, user_id: Uuid) -> AppResult<Vec<SellerNotification>>;

    /// Count a seller's unread notifications.
    async fn count_unread(&self, user_id: Uuid) -> AppResult<i64>;

    /// Mark one of a seller's notifications as read. Returns `true` if
    /// the notification exists and belongs to that seller.
    async fn mark_read(&self, user_id: Uuid, notification_id: Uuid) -> AppResult<bool>;

    /// Mark all of a seller's unread notifications as read. Returns the
    /// number of rows updated.
    async fn mark_all_read(&self, user_id: Uuid) -> AppResult<u64>;
}

/// Postgres-backed [`SellerNotificationRepository`].
#[derive(Debug, Clone)]
pub struct PgSellerNotificationRepository {
    pool: PgPool,
}

impl PgSellerNotificationRepository {
    /// Create a new seller notification repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SellerNotificationRepository for PgSellerNotificationRepository {
    async fn create(&self, notification: &NewSellerNotification) -> AppResult<SellerNotification> {
        sqlx::query_as::<_, SellerNotification>(
            "INSERT INTO seller_notifications (user_id, title, message, kind, action_url, product_id, job_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
        )
        .bind(notification.user_id)
        .bind(&notification.title)
        .bind(&notification.message)
        .bind(notification.kind)
        .bind(&notification.action_url)
        .bind(notification.product_id)
        .bind(notification.job_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to create seller notification", e)
        })
    }

    async fn find_by_user(&self, user_id: Uuid) -> AppResult<Vec<SellerNotification>> {
        sqlx::query_as::<_, SellerNotification>(
            "SELECT * FROM seller_notifications WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to fetch seller notifications", e)
        })
    }

    async fn count_unread(&self, user_id: Uuid) -> AppResult<i64> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM seller_notifications WHERE user_id = $1 AND is_read = FALSE",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count unread", e)
        })
    }

    async fn mark_read(&self, user_id: Uuid, notification_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE seller_notifications SET is_read = TRUE WHERE id = $1 AND user_id = $2",
        )
        .bind(notification_id)
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to mark read", e))?;
        Ok(result.rows_affected() > 0)
    }

    async fn mark_all_read(&self, user_id: Uuid) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE seller_notifications SET is_read = TRUE WHERE user_id = $1 AND is_read = FALSE",
        )
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to mark all read", e))?;
        Ok(result.rows_affected())
    }
}
