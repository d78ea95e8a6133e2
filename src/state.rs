//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use sqlx::PgPool;

use crate::{
    config::Config,
    db::repositories::{
        AssignmentRepository, EnrollmentRepository, PgAssignmentRepository,
        PgEnrollmentRepository, PgSubmissionRepository, SubmissionRepository,
    },
    storage::{FileStorage, LocalDiskStorage},
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Assignment lookups
    pub assignments: Arc<dyn AssignmentRepository>,

    /// Enrollment lookups
    pub enrollments: Arc<dyn EnrollmentRepository>,

    /// Submission reads and upserts
    pub submissions: Arc<dyn SubmissionRepository>,

    /// Uploaded file storage
    pub storage: Arc<dyn FileStorage>,

    /// Application configuration
    pub config: Config,
}

impl AppState {
    /// Create a new application state from its collaborators
    pub fn new(
        assignments: Arc<dyn AssignmentRepository>,
        enrollments: Arc<dyn EnrollmentRepository>,
        submissions: Arc<dyn SubmissionRepository>,
        storage: Arc<dyn FileStorage>,
        config: Config,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                assignments,
                enrollments,
                submissions,
                storage,
                config,
            }),
        }
    }

    /// Create the production state backed by PostgreSQL and local disk
    pub fn from_pool(db: PgPool, config: Config) -> Self {
        let storage = LocalDiskStorage::from_config(&config.storage);
        Self::new(
            Arc::new(PgAssignmentRepository::new(db.clone())),
            Arc::new(PgEnrollmentRepository::new(db.clone())),
            Arc::new(PgSubmissionRepository::new(db)),
            Arc::new(storage),
            config,
        )
    }

    /// Get the assignment repository
    pub fn assignments(&self) -> &dyn AssignmentRepository {
        self.inner.assignments.as_ref()
    }

    /// Get the enrollment repository
    pub fn enrollments(&self) -> &dyn EnrollmentRepository {
        self.inner.enrollments.as_ref()
    }

    /// Get the submission repository
    pub fn submissions(&self) -> &dyn SubmissionRepository {
        self.inner.submissions.as_ref()
    }

    /// Get the file storage backend
    pub fn storage(&self) -> &dyn FileStorage {
        self.inner.storage.as_ref()
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}
