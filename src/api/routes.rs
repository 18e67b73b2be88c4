//! Router configuration for the API.
//!
//! This module provides route registration and middleware configuration
//! for the relay.

use axum::{Router, middleware, routing::post};

use crate::api::handlers;
use crate::api::middleware::{logging_middleware, not_found, request_id_middleware};
use crate::state::AppState;

/// Creates the application router.
///
/// # Middleware Order
/// Middleware is applied in reverse order of declaration (last added runs first):
/// 1. Request ID middleware (runs first) - generates/propagates request IDs
/// 2. Logging middleware (runs second) - logs requests with request IDs
///
/// # Routes
/// - `POST <request_path>` - inbound monitor notification
///
/// Anything else is answered with an empty 404 (or 405 for other methods
/// on the notification path).
pub fn create_router(state: AppState) -> Router {
    let path = state.config.request_path().to_string();

    Router::new()
        .route(&path, post(handlers::webhook::receive_notification))
        .fallback(not_found)
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
