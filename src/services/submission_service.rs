//! Submission service

use chrono::{DateTime, Utc};

use crate::{
    constants::{messages, ASSIGNMENTS_BUCKET},
    error::{AppError, AppResult},
    models::{AssignmentSubmission, SubmissionUpsert},
    services::authorization::EnrolledStudent,
    state::AppState,
    utils::content_hash,
};

/// A file received from the client
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile {
    /// Client file name, already reduced to its last path component
    pub original_name: String,
    pub bytes: Vec<u8>,
}

/// Result of a submit
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionOutcome {
    pub submission: AssignmentSubmission,
    /// A submission already existed and was overwritten
    pub is_update: bool,
    pub is_late: bool,
}

impl SubmissionOutcome {
    /// Client-facing message, with a warning appended for late uploads
    pub fn message(&self) -> String {
        let base = if self.is_update {
            messages::UPDATED
        } else {
            messages::SUBMITTED
        };

        if self.is_late {
            format!("{}{}", base, messages::LATE_WARNING)
        } else {
            base.to_string()
        }
    }
}

/// Submission service for business logic
pub struct SubmissionService;

impl SubmissionService {
    /// Get the student's current submission, if any
    pub async fn my_submission(
        state: &AppState,
        enrolled: &EnrolledStudent,
    ) -> AppResult<Option<AssignmentSubmission>> {
        state
            .submissions()
            .find(enrolled.assignment.id, enrolled.user.id)
            .await
    }

    /// Store the upload and create or replace the student's submission.
    ///
    /// The file is written before the row. If the upsert fails the file is
    /// removed again; a crash between the two steps can still orphan it.
    pub async fn submit(
        state: &AppState,
        enrolled: &EnrolledStudent,
        upload: UploadedFile,
        now: DateTime<Utc>,
    ) -> AppResult<SubmissionOutcome> {
        let max_kb = state.config().storage.max_upload_size_kb;
        validate_upload_size(upload.bytes.len(), max_kb)?;

        let assignment_id = enrolled.assignment.id;
        let user_id = enrolled.user.id;

        let existing = state.submissions().find(assignment_id, user_id).await?;

        let file_name = Self::stored_file_name(now, user_id, &upload);
        let stored = state
            .storage()
            .store(ASSIGNMENTS_BUCKET, &file_name, &upload.bytes)
            .await?;

        let is_late = enrolled.assignment.is_late_at(now);

        let upsert = SubmissionUpsert {
            assignment_id,
            user_id,
            file_path: stored.public_path.clone(),
            submitted_at: now,
            is_late,
        };

        let submission = match state.submissions().upsert(&upsert).await {
            Ok(submission) => submission,
            Err(e) => {
                // Identical bytes re-sent within the same second land on the
                // path the committed row already references; keep that file.
                let still_referenced = existing
                    .as_ref()
                    .is_some_and(|current| current.file_path == stored.public_path);

                if !still_referenced {
                    if let Err(cleanup) = state.storage().delete(&stored.relative_path).await {
                        tracing::warn!(
                            path = %stored.relative_path,
                            error = %cleanup,
                            "Failed to remove file after submission write failed"
                        );
                    }
                }
                return Err(e);
            }
        };

        tracing::info!(
            assignment_id,
            user_id,
            file_path = %submission.file_path,
            size = upload.bytes.len(),
            is_late,
            is_update = existing.is_some(),
            "Assignment submission stored"
        );

        Ok(SubmissionOutcome {
            submission,
            is_update: existing.is_some(),
            is_late,
        })
    }

    /// Name under which an upload is stored.
    ///
    /// `{unix_seconds}_{user_id}_{content_hash}_{original_name}`; the content
    /// hash keeps two different uploads in the same second apart.
    pub fn stored_file_name(now: DateTime<Utc>, user_id: i64, upload: &UploadedFile) -> String {
        format!(
            "{}_{}_{}_{}",
            now.timestamp(),
            user_id,
            content_hash(&upload.bytes),
            upload.original_name
        )
    }
}

/// Reject uploads larger than `max_kb` kilobytes
pub fn validate_upload_size(len: usize, max_kb: u64) -> AppResult<()> {
    if len as u64 > max_kb.saturating_mul(1024) {
        return Err(upload_too_large(max_kb));
    }
    Ok(())
}

/// Validation error for an oversized upload
pub fn upload_too_large(max_kb: u64) -> AppError {
    AppError::Validation(format!(
        "The file field must not be greater than {} kilobytes.",
        max_kb
    ))
}
