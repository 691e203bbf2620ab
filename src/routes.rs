//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /save`   - Create a mapping
//! - `GET /go`     - Redirect by token
//! - `GET /health` - Store health check
//!
//! # Middleware
//!
//! - **Request id** - Assigns/propagates `x-request-id` and opens the request span
//! - **Tracing** - Structured request/response logging inside that span

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{request_id, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::ServiceBuilder;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .merge(api::routes::shortener_routes())
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id::layer))
                .layer(tracing::layer()),
        )
}
