//! Assignment model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Assignment database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, PartialEq)]
pub struct Assignment {
    pub id: i64,
    pub section_id: Option<i64>,
    pub title: String,
    pub due_at: Option<DateTime<Utc>>,
}

impl Assignment {
    /// Whether a submission made at `at` counts as late.
    ///
    /// Only strictly after the due instant is late; no due date means never late.
    pub fn is_late_at(&self, at: DateTime<Utc>) -> bool {
        matches!(self.due_at, Some(due_at) if at > due_at)
    }
}

/// An assignment together with the ids of the section and course it hangs off.
///
/// Either link may be missing when the parent row was removed.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentWithCourse {
    pub assignment: Assignment,
    pub section_id: Option<i64>,
    pub course_id: Option<i64>,
}

impl AssignmentWithCourse {
    /// Course that owns the assignment, if the whole chain resolves
    pub fn course_id(&self) -> Option<i64> {
        self.section_id.and(self.course_id)
    }
}
