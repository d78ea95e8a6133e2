//! Assignment submission response DTOs

use serde::Serialize;

use crate::{models::AssignmentSubmission, services::SubmissionOutcome};

/// Response for the caller's own submission; `data` is null when none exists
#[derive(Debug, Serialize)]
pub struct MySubmissionResponse {
    pub status: bool,
    pub data: Option<AssignmentSubmission>,
}

/// Response for a created or replaced submission
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub status: bool,
    pub message: String,
    pub is_late: bool,
    pub is_update: bool,
    pub data: AssignmentSubmission,
}

impl From<SubmissionOutcome> for SubmitResponse {
    fn from(outcome: SubmissionOutcome) -> Self {
        Self {
            status: true,
            message: outcome.message(),
            is_late: outcome.is_late,
            is_update: outcome.is_update,
            data: outcome.submission,
        }
    }
}
