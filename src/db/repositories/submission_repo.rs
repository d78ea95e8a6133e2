//! Assignment submission repository

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    error::AppResult,
    models::{AssignmentSubmission, SubmissionUpsert},
};

/// Storage for assignment submissions, one row per assignment and user
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionRepository: Send + Sync {
    /// Find the caller's submission for an assignment
    async fn find(
        &self,
        assignment_id: i64,
        user_id: i64,
    ) -> AppResult<Option<AssignmentSubmission>>;

    /// Create the submission or overwrite the existing one for the same key
    async fn upsert(&self, submission: &SubmissionUpsert) -> AppResult<AssignmentSubmission>;
}

/// PostgreSQL-backed submission repository
#[derive(Clone)]
pub struct PgSubmissionRepository {
    pool: PgPool,
}

impl PgSubmissionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubmissionRepository for PgSubmissionRepository {
    async fn find(
        &self,
        assignment_id: i64,
        user_id: i64,
    ) -> AppResult<Option<AssignmentSubmission>> {
        let submission = sqlx::query_as::<_, AssignmentSubmission>(
            r#"
            SELECT * FROM assignment_submissions
            WHERE assignment_id = $1 AND user_id = $2
            "#,
        )
        .bind(assignment_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(submission)
    }

    async fn upsert(&self, submission: &SubmissionUpsert) -> AppResult<AssignmentSubmission> {
        let submission = sqlx::query_as::<_, AssignmentSubmission>(
            r#"
            INSERT INTO assignment_submissions
                (assignment_id, user_id, file_path, submitted_at, is_late)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (assignment_id, user_id) DO UPDATE SET
                file_path = EXCLUDED.file_path,
                submitted_at = EXCLUDED.submitted_at,
                is_late = EXCLUDED.is_late,
                updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(submission.assignment_id)
        .bind(submission.user_id)
        .bind(&submission.file_path)
        .bind(submission.submitted_at)
        .bind(submission.is_late)
        .fetch_one(&self.pool)
        .await?;

        Ok(submission)
    }
}
