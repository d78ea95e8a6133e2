//! Utility functions

pub mod crypto;
pub mod time;
pub mod validation;

pub use crypto::{content_hash, hash_bytes};
pub use time::now_utc;
pub use validation::{client_file_name, is_single_path_component};
