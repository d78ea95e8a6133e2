//! Coursework - Assignment Submission Service
//!
//! This library provides the student-facing submission endpoints of a
//! learning-management system.
//!
//! # Features
//!
//! - Students fetch their own submission for an assignment
//! - Students upload (or replace) a file for an assignment, with late
//!   submissions accepted but flagged
//! - Enrollment-based access control derived from assignment → section → course
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Authorization guard and business logic
//! - **Repositories**: Database access behind traits
//! - **Storage**: Uploaded file persistence
//! - **Models**: Domain models

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod storage;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use handlers::create_router;
pub use state::AppState;
