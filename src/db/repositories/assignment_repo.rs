//! Assignment repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use crate::{
    error::AppResult,
    models::{Assignment, AssignmentWithCourse},
};

/// Read access to assignments and their owning course
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AssignmentRepository: Send + Sync {
    /// Load an assignment along with its section and course ids in one fetch
    async fn find_with_course(
        &self,
        assignment_id: i64,
    ) -> AppResult<Option<AssignmentWithCourse>>;
}

/// PostgreSQL-backed assignment repository
#[derive(Clone)]
pub struct PgAssignmentRepository {
    pool: PgPool,
}

impl PgAssignmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AssignmentCourseRow {
    id: i64,
    section_id: Option<i64>,
    title: String,
    due_at: Option<DateTime<Utc>>,
    joined_section_id: Option<i64>,
    joined_course_id: Option<i64>,
}

impl From<AssignmentCourseRow> for AssignmentWithCourse {
    fn from(row: AssignmentCourseRow) -> Self {
        Self {
            assignment: Assignment {
                id: row.id,
                section_id: row.section_id,
                title: row.title,
                due_at: row.due_at,
            },
            section_id: row.joined_section_id,
            course_id: row.joined_course_id,
        }
    }
}

#[async_trait]
impl AssignmentRepository for PgAssignmentRepository {
    async fn find_with_course(
        &self,
        assignment_id: i64,
    ) -> AppResult<Option<AssignmentWithCourse>> {
        // LEFT JOINs so a dangling section or course surfaces as NULL rather than no row
        let row = sqlx::query_as::<_, AssignmentCourseRow>(
            r#"
            SELECT
                a.id,
                a.section_id,
                a.title,
                a.due_at,
                s.id AS joined_section_id,
                c.id AS joined_course_id
            FROM assignments a
            LEFT JOIN sections s ON s.id = a.section_id
            LEFT JOIN courses c ON c.id = s.course_id
            WHERE a.id = $1
            "#,
        )
        .bind(assignment_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Into::into))
    }
}
