//! Job post and application entity models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A part-time or campus job posted by a member.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobPost {
    /// Unique job identifier.
    pub id: Uuid,
    /// The member who posted the job.
    pub seller_id: Uuid,
    /// Job title.
    pub job_title: String,
    /// Job description text.
    pub job_description: String,
    /// Offered salary in whole currency units, if stated.
    pub salary: Option<i64>,
    /// When the post was created.
    pub created_at: DateTime<Utc>,
    /// When the post was last modified.
    pub updated_at: DateTime<Utc>,
}

/// Fields for creating a new job post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewJob {
    /// Job title.
    pub job_title: String,
    /// Job description text.
    pub job_description: String,
    /// Offered salary, if stated.
    pub salary: Option<i64>,
}

/// A member's application to a job post.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobApplication {
    /// Unique application identifier.
    pub id: Uuid,
    /// The job applied to.
    pub job_id: Uuid,
    /// The applying member.
    pub applicant_id: Uuid,
    /// Applicant's contact phone number.
    pub phone_number: String,
    /// When the application was submitted.
    pub applied_at: DateTime<Utc>,
}

/// Fields for submitting a new job application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewJobApplication {
    /// The job applied to.
    pub job_id: Uuid,
    /// Applicant's contact phone number.
    pub phone_number: String,
}
