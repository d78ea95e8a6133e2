//! Authorization guard for assignment-scoped student actions.
//!
//! Every submission read or write goes through [`require_enrollment`] first.

use crate::{
    constants::messages,
    error::{AppError, AppResult},
    middleware::auth::AuthenticatedUser,
    models::Assignment,
    state::AppState,
};

/// A student confirmed to be enrolled in the course owning an assignment
#[derive(Debug, Clone, PartialEq)]
pub struct EnrolledStudent {
    pub user: AuthenticatedUser,
    pub assignment: Assignment,
    pub course_id: i64,
}

/// Check that the caller holds the student role.
pub fn require_student(user: &AuthenticatedUser) -> AppResult<&AuthenticatedUser> {
    if !user.is_student() {
        return Err(AppError::Unauthorized);
    }
    Ok(user)
}

/// Check that the caller is a student enrolled in the course of `assignment_id`.
///
/// The assignment is loaded with its section and course in one fetch; a
/// missing link anywhere in that chain is reported as not found.
pub async fn require_enrollment(
    state: &AppState,
    user: &AuthenticatedUser,
    assignment_id: i64,
) -> AppResult<EnrolledStudent> {
    require_student(user)?;

    let scoped = state
        .assignments()
        .find_with_course(assignment_id)
        .await?
        .ok_or_else(AppError::assignment_not_found)?;

    let course_id = scoped.course_id().ok_or_else(AppError::assignment_not_found)?;

    if !state.enrollments().exists(user.id, course_id).await? {
        tracing::debug!(user_id = user.id, course_id, "Student not enrolled in course");
        return Err(AppError::Forbidden(messages::NOT_ENROLLED.to_string()));
    }

    Ok(EnrolledStudent {
        user: user.clone(),
        assignment: scoped.assignment,
        course_id,
    })
}
