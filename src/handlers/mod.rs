//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod assignments;
pub mod health;

use axum::{middleware, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::{
    constants::API_BASE_PATH,
    middleware::{auth::auth_middleware, logging::logging_middleware},
    state::AppState,
};

/// Create all API routes
pub fn routes(state: &AppState) -> Router<AppState> {
    Router::new().merge(health::routes()).nest(
        "/assignments",
        assignments::routes(state.config())
            .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware)),
    )
}

/// Build the full application: API under `/api`, stored files under the
/// public storage prefix.
pub fn create_router(state: AppState) -> Router {
    let storage = &state.config().storage;
    let files = ServeDir::new(&storage.root);

    Router::new()
        .nest(API_BASE_PATH, routes(&state))
        .nest_service(&storage.public_prefix, files)
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
