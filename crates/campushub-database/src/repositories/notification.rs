//! Notification repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use campushub_core::error::{AppError, ErrorKind};
use campushub_core::result::AppResult;
use campushub_entity::notification::{NewNotification, Notification};

/// Repository for the per-user notification feed.
#[async_trait]
pub trait NotificationRepository: Send + Sync + 'static {
    /// Create a notification for a user.
    async fn create(&self, user_id: Uuid, notification: &NewNotification)
    -> AppResult<Notification>;

    /// List a user's notifications, newest first.
    async fn find_by_user(&self, user_id: Uuid) -> AppResult<Vec<Notification>>;

    /// List a user's unread notifications, newest first.
    async fn find_unread(&self, user_id: Uuid) -> AppResult<Vec<Notification>>;

    /// Count a user's unread notifications.
    async fn count_unread(&self, user_id: Uuid) -> AppResult<i64>;

    /// Find a notification by id.
    async fn find_by_id(&self, notification_id: Uuid) -> AppResult<Option<Notification>>;

    /// Mark a notification as read.
    async fn mark_read(&self, notification_id: Uuid) -> AppResult<()>;

    /// Mark all of a user's unread notifications as read. Returns the
    /// number of rows updated.
    async fn mark_all_read(&self, user_id: Uuid) -> AppResult<u64>;

    /// Delete a notification by id.
    async fn delete(&self, notification_id: Uuid) -> AppResult<()>;
}

/// Postgres-backed [`NotificationRepository`].
#[derive(Debug, Clone)]
pub struct PgNotificationRepository {
    pool: PgPool,
}

impl PgNotificationRepository {
    /// Create a new notification repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NotificationRepository for PgNotificationRepository {
    async fn create(
        &self,
        user_id: Uuid,
        notification: &NewNotification,
    ) -> AppResult<Notification> {
        sqlx::query_as::<_, Notification>(
            "INSERT INTO notifications (user_id, title, message, kind, action_url, related_event_id, expires_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
        )
        .bind(user_id)
        .bind(&notification.title)
        .bind(&notification.message)
        .bind(notification.kind)
        .bind(&notification.action_url)
        .bind(notification.related_event_id)
        .bind(notification.expires_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create notification", e))
    }

    async fn find_by_user(&self, user_id: Uuid) -> AppResult<Vec<Notification>> {
        sqlx::query_as::<_, Notification>(
            "SELECT * FROM notifications WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to fetch notifications", e))
    }

    async fn find_unread(&self, user_id: Uuid) -> AppResult<Vec<Notification>> {
        sqlx::query_as::<_, Notification>(
            "SELECT * FROM notifications WHERE user_id = $1 AND is_read = FALSE \
             ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to fetch unread notifications", e)
        })
    }

    async fn count_unread(&self, user_id: Uuid) -> AppResult<i64> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM notifications WHERE user_id = $1 AND is_read = FALSE",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count unread", e))
    }

    async fn find_by_id(&self, notification_id: Uuid) -> AppResult<Option<Notification>> {
        sqlx::query_as::<_, Notification>("SELECT * FROM notifications WHERE id = $1")
            .bind(notification_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to fetch notification", e)
            })
    }

    async fn mark_read(&self, notification_id: Uuid) -> AppResult<()> {
        sqlx::query("UPDATE notifications SET is_read = TRUE WHERE id = $1")
            .bind(notification_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to mark read", e))?;
        Ok(())
    }

    async fn mark_all_read(&self, user_id: Uuid) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE notifications SET is_read = TRUE WHERE user_id = $1 AND is_read = FALSE",
        )
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to mark all read", e))?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, notification_id: Uuid) -> AppResult<()> {
        sqlx::query("DELETE FROM notifications WHERE id = $1")
            .bind(notification_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete notification", e)
            })?;
        Ok(())
    }
}
