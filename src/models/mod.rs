//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod assignment;
pub mod submission;

pub use assignment::*;
pub use submission::*;
