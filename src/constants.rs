//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

/// Seconds to wait for a free pool connection before failing a request
pub const DATABASE_ACQUIRE_TIMEOUT_SECS: u64 = 5;

// =============================================================================
// STORAGE DEFAULTS
// =============================================================================

/// Default directory backing the public storage disk
pub const DEFAULT_STORAGE_ROOT: &str = "./storage/public";

/// URL prefix under which stored files are exposed
pub const DEFAULT_STORAGE_PUBLIC_PREFIX: &str = "/storage";

/// Bucket that assignment uploads are written to
pub const ASSIGNMENTS_BUCKET: &str = "assignments";

/// Default maximum upload size in kilobytes (20 MB)
pub const DEFAULT_MAX_UPLOAD_SIZE_KB: u64 = 20 * 1024;

/// Slack allowed on top of the file limit for multipart framing
pub const MULTIPART_OVERHEAD_BYTES: usize = 1024 * 1024;

/// Number of hex characters of the content hash kept in stored file names
pub const CONTENT_HASH_PREFIX_LEN: usize = 12;

// =============================================================================
// USER ROLES
// =============================================================================

/// User role identifiers
pub mod roles {
    pub const ADMIN: &str = "admin";
    pub const INSTRUCTOR: &str = "instructor";
    pub const STUDENT: &str = "student";
}

// =============================================================================
// RESPONSE MESSAGES
// =============================================================================

/// Human-readable messages returned to clients
pub mod messages {
    pub const STUDENTS_ONLY: &str = "Students only";
    pub const ASSIGNMENT_NOT_FOUND: &str = "Assignment not found";
    pub const NOT_ENROLLED: &str = "You are not enrolled in this course";

    pub const FILE_REQUIRED: &str = "The file field is required.";
    pub const FILE_NOT_A_FILE: &str = "The file field must be a file.";

    pub const SUBMITTED: &str = "Assignment submitted successfully.";
    pub const UPDATED: &str = "Assignment updated successfully.";
    pub const LATE_WARNING: &str =
        " Warning: Your assignment is being uploaded after the due date.";
}

// =============================================================================
// API ROUTING
// =============================================================================

/// API base path
pub const API_BASE_PATH: &str = "/api";

/// Multipart field carrying the uploaded file
pub const UPLOAD_FIELD_NAME: &str = "file";
