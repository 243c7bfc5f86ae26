//! Job post repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use campushub_core::error::{AppError, ErrorKind};
use campushub_core::result::AppResult;
use campushub_entity::marketplace::{JobApplication, JobPost, NewJob, NewJobApplication};

/// Repository for job posts and their applications.
#[async_trait]
pub trait JobRepository: Send + Sync + 'static {
    /// List all job posts, newest first.
    async fn find_all(&self) -> AppResult<Vec<JobPost>>;

    /// List a seller's job posts, newest first.
    async fn find_by_seller(&self, seller_id: Uuid) -> AppResult<Vec<JobPost>>;

    /// Find a job post by id.
    async fn find_by_id(&self, job_id: Uuid) -> AppResult<Option<JobPost>>;

    /// Create a job post owned by the given seller.
    async fn create(&self, seller_id: Uuid, job: &NewJob) -> AppResult<JobPost>;

    /// Delete a job post. Returns `true` if a row was removed.
    async fn delete(&self, job_id: Uuid) -> AppResult<bool>;

    /// Record an application against a job post.
    async fn create_application(
        &self,
        applicant_id: Uuid,
        application: &NewJobApplication,
    ) -> AppResult<JobApplication>;
}

/// Postgres-backed [`JobRepository`].
#[derive(Debug, Clone)]
pub struct PgJobRepository {
    pool: PgPool,
}

impl PgJobRepository {
    /// Create a new job repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobRepository for PgJobRepository {
    async fn find_all(&self) -> AppResult<Vec<JobPost>> {
        sqlx::query_as::<_, JobPost>("SELECT * FROM job_posts ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to fetch job posts", e))
    }

    async fn find_by_seller(&self, seller_id: Uuid) -> AppResult<Vec<JobPost>> {
        sqlx::query_as::<_, JobPost>(
            "SELECT * FROM job_posts WHERE seller_id = $1 ORDER BY created_at DESC",
        )
        .bind(seller_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to fetch seller job posts", e)
        })
    }

    async fn find_by_id(&self, job_id: Uuid) -> AppResult<Option<JobPost>> {
        sqlx::query_as::<_, JobPost>("SELECT * FROM job_posts WHERE id = $1")
            .bind(job_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to fetch job post", e))
    }

    async fn create(&self, seller_id: Uuid, job: &NewJob) -> AppResult<JobPost> {
        sqlx::query_as::<_, JobPost>(
            "INSERT INTO job_posts (seller_id, job_title, job_description, salary) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(seller_id)
        .bind(&job.job_title)
        .bind(&job.job_description)
        .bind(job.salary)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create job post", e))
    }

    async fn delete(&self, job_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM job_posts WHERE id = $1")
            .bind(job_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete job post", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    async fn create_application(
        &self,
        applicant_id: Uuid,
        application: &NewJobApplication,
    ) -> AppResult<JobApplication> {
        sqlx::query_as::<_, JobApplication>(
            "INSERT INTO job_applications (job_id, applicant_id, phone_number) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(application.job_id)
        .bind(applicant_id)
        .bind(&application.phone_number)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to create job application", e)
        })
    }
}
