//! Assignment submission handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use response::*;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::{config::Config, constants::MULTIPART_OVERHEAD_BYTES, state::AppState};

/// Assignment routes
pub fn routes(config: &Config) -> Router<AppState> {
    let body_limit = config
        .storage
        .max_upload_bytes()
        .saturating_add(MULTIPART_OVERHEAD_BYTES);

    Router::new()
        .route("/{id}/my-submission", get(handler::my_submission))
        .route(
            "/{id}/submit",
            post(handler::submit).layer(DefaultBodyLimit::max(body_limit)),
        )
}
