//! Event reminder repository implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use campushub_core::error::{AppError, ErrorKind};
use campushub_core::result::AppResult;
use campushub_entity::event::EventReminder;

/// Repository for event reminder rows.
#[async_trait]
pub trait ReminderRepository: Send + Sync + 'static {
    /// Create a reminder for a user and event.
    async fn create(
        &self,
        user_id: Uuid,
        event_id: Uuid,
        reminder_time: DateTime<Utc>,
    ) -> AppResult<EventReminder>;

    /// List a user's reminders, newest first.
    async fn find_by_user(&self, user_id: Uuid) -> AppResult<Vec<EventReminder>>;

    /// Find the reminder a user holds for a specific event, if any.
    async fn find_by_user_and_event(
        &self,
        user_id: Uuid,
        event_id: Uuid,
    ) -> AppResult<Option<EventReminder>>;

    /// List every unsent reminder whose time has passed.
    async fn find_overdue(&self, now: DateTime<Utc>) -> AppResult<Vec<EventReminder>>;

    /// Flip `is_sent` to true for a processed reminder.
    async fn mark_sent(&self, reminder_id: Uuid) -> AppResult<()>;

    /// Delete a reminder by id. Returns `true` if a row was removed.
    async fn delete(&self, reminder_id: Uuid) -> AppResult<bool>;

    /// Delete the reminder for a (event, user) pair. Returns the number of
    /// rows removed.
    async fn delete_by_event_and_user(&self, event_id: Uuid, user_id: Uuid) -> AppResult<u64>;
}

/// Postgres-backed [`ReminderRepository`].
#[derive(Debug, Clone)]
pub struct PgReminderRepository {
    pool: PgPool,
}

impl PgReminderRepository {
    /// Create a new reminder repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReminderRepository for PgReminderRepository {
    async fn create(
        &self,
        user_id: Uuid,
        event_id: Uuid,
        reminder_time: DateTime<Utc>,
    ) -> AppResult<EventReminder> {
        sqlx::query_as::<_, EventReminder>(
            "INSERT INTO event_reminders (user_id, event_id, reminder_time) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(user_id)
        .bind(event_id)
        .bind(reminder_time)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to create event reminder", e)
        })
    }

    async fn find_by_user(&self, user_id: Uuid) -> AppResult<Vec<EventReminder>> {
        sqlx::query_as::<_, EventReminder>(
            "SELECT * FROM event_reminders WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to fetch user reminders", e)
        })
    }

    async fn find_by_user_and_event(
        &self,
        user_id: Uuid,
        event_id: Uuid,
    ) -> AppResult<Option<EventReminder>> {
        sqlx::query_as::<_, EventReminder>(
            "SELECT * FROM event_reminders WHERE user_id = $1 AND event_id = $2",
        )
        .bind(user_id)
        .bind(event_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to fetch reminder", e))
    }

    async fn find_overdue(&self, now: DateTime<Utc>) -> AppResult<Vec<EventReminder>> {
        sqlx::query_as::<_, EventReminder>(
            "SELECT * FROM event_reminders WHERE reminder_time <= $1 AND is_sent = FALSE",
        )
        .bind(now)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to fetch overdue reminders", e)
        })
    }

    async fn mark_sent(&self, reminder_id: Uuid) -> AppResult<()> {
        sqlx::query("UPDATE event_reminders SET is_sent = TRUE WHERE id = $1")
            .bind(reminder_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to mark reminder as sent", e)
            })?;
        Ok(())
    }

    async fn delete(&self, reminder_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM event_reminders WHERE id = $1")
            .bind(reminder_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete reminder", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_event_and_user(&self, event_id: Uuid, user_id: Uuid) -> AppResult<u64> {
        let result =
            sqlx::query("DELETE FROM event_reminders WHERE event_id = $1 AND user_id = $2")
                .bind(event_id)
                .bind(user_id)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to delete event reminder", e)
                })?;
        Ok(result.rows_affected())
    }
}
