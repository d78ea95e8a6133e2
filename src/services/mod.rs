//! Business logic services

pub mod auth_service;
pub mod authorization;
pub mod submission_service;

pub use auth_service::AuthService;
pub use authorization::{require_enrollment, require_student, EnrolledStudent};
pub use submission_service::{SubmissionOutcome, SubmissionService, UploadedFile};
