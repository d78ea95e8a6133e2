//! Assignment submission model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Assignment submission database model
///
/// At most one row exists per `(assignment_id, user_id)`.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, PartialEq)]
pub struct AssignmentSubmission {
    pub id: i64,
    pub assignment_id: i64,
    pub user_id: i64,
    pub file_path: String,
    pub submitted_at: DateTime<Utc>,
    pub is_late: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Values written by a submit; keyed by assignment and user
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionUpsert {
    pub assignment_id: i64,
    pub user_id: i64,
    pub file_path: String,
    pub submitted_at: DateTime<Utc>,
    pub is_late: bool,
}
