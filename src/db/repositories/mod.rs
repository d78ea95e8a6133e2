//! Database repositories
//!
//! Repositories handle all direct database interactions. Each one is a trait
//! so the authorization guard and services can run against test doubles; the
//! `Pg*` types are the PostgreSQL implementations.

pub mod assignment_repo;
pub mod enrollment_repo;
pub mod submission_repo;

pub use assignment_repo::{AssignmentRepository, PgAssignmentRepository};
pub use enrollment_repo::{EnrollmentRepository, PgEnrollmentRepository};
pub use submission_repo::{PgSubmissionRepository, SubmissionRepository};

#[cfg(test)]
pub use assignment_repo::MockAssignmentRepository;
#[cfg(test)]
pub use enrollment_repo::MockEnrollmentRepository;
#[cfg(test)]
pub use submission_repo::MockSubmissionRepository;
