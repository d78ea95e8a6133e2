//! Enrollment repository

use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::AppResult;

/// Course enrollment lookups
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    /// Whether an enrollment row exists for the user and course
    async fn exists(&self, user_id: i64, course_id: i64) -> AppResult<bool>;
}

/// PostgreSQL-backed enrollment repository
#[derive(Clone)]
pub struct PgEnrollmentRepository {
    pool: PgPool,
}

impl PgEnrollmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EnrollmentRepository for PgEnrollmentRepository {
    async fn exists(&self, user_id: i64, course_id: i64) -> AppResult<bool> {
        let enrolled: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM enrollments
                WHERE user_id = $1 AND course_id = $2
            )
            "#,
        )
        .bind(user_id)
        .bind(course_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(enrolled)
    }
}
