//! Event repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use campushub_core::error::{AppError, ErrorKind};
use campushub_core::result::AppResult;
use campushub_entity::event::{Event, EventPatch, NewEvent};

/// Repository for campus event CRUD operations.
#[async_trait]
pub trait EventRepository: Send + Sync + 'static {
    /// List all events, newest first.
    async fn find_all(&self) -> AppResult<Vec<Event>>;

    /// List active events, newest first.
    async fn find_active(&self) -> AppResult<Vec<Event>>;

    /// Find an event by id.
    async fn find_by_id(&self, event_id: Uuid) -> AppResult<Option<Event>>;

    /// Create an event on behalf of the given admin.
    async fn create(&self, created_by: Uuid, event: &NewEvent) -> AppResult<Event>;

    /// Apply a partial update, bumping `updated_at`.
    async fn update(&self, event_id: Uuid, patch: &EventPatch) -> AppResult<Event>;

    /// Set the visibility flag, bumping `updated_at`.
    async fn set_active(&self, event_id: Uuid, is_active: bool) -> AppResult<Event>;

    /// Delete an event. Returns `true` if a row was removed.
    async fn delete(&self, event_id: Uuid) -> AppResult<bool>;
}

/// Postgres-backed [`EventRepository`].
#[derive(Debug, Clone)]
pub struct PgEventRepository {
    pool: PgPool,
}

impl PgEventRepository {
    /// Create a new event repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventRepository for PgEventRepository {
    async fn find_all(&self) -> AppResult<Vec<Event>> {
        sqlx::query_as::<_, Event>("SELECT * FROM events ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to fetch events", e))
    }

    async fn find_active(&self) -> AppResult<Vec<Event>> {
        sqlx::query_as::<_, Event>(
            "SELECT * FROM events WHERE is_active = TRUE ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to fetch active events", e))
    }

    async fn find_by_id(&self, event_id: Uuid) -> AppResult<Option<Event>> {
        sqlx::query_as::<_, Event>("SELECT * FROM events WHERE id = $1")
            .bind(event_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to fetch event", e))
    }

    async fn create(&self, created_by: Uuid, event: &NewEvent) -> AppResult<Event> {
        sqlx::query_as::<_, Event>(
            "INSERT INTO events (title, description, event_type, event_date, location, image_url, created_by) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
        )
        .bind(&event.title)
        .bind(&event.description)
        .bind(event.event_type)
        .bind(event.event_date)
        .bind(&event.location)
        .bind(&event.image_url)
        .bind(created_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create event", e))
    }

    async fn update(&self, event_id: Uuid, patch: &EventPatch) -> AppResult<Event> {
        sqlx::query_as::<_, Event>(
            "UPDATE events SET \
                title = COALESCE($2, title), \
                description = COALESCE($3, description), \
                event_type = COALESCE($4, event_type), \
                event_date = COALESCE($5, event_date), \
                location = COALESCE($6, location), \
                image_url = COALESCE($7, image_url), \
                is_active = COALESCE($8, is_active), \
                updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(event_id)
        .bind(&patch.title)
        .bind(&patch.description)
        .bind(patch.event_type)
        .bind(patch.event_date)
        .bind(&patch.location)
        .bind(&patch.image_url)
        .bind(patch.is_active)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update event", e))?
        .ok_or_else(|| AppError::not_found("Event not found"))
    }

    async fn set_active(&self, event_id: Uuid, is_active: bool) -> AppResult<Event> {
        sqlx::query_as::<_, Event>(
            "UPDATE events SET is_active = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(event_id)
        .bind(is_active)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to toggle event active status", e)
        })?
        .ok_or_else(|| AppError::not_found("Event not found"))
    }

    async fn delete(&self, event_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(event_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete event", e))?;
        Ok(result.rows_affected() > 0)
    }
}
