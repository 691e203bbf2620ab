//! Shortener route configuration.

use crate::api::handlers::{resolve_handler, save_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Public shortener routes.
///
/// # Endpoints
///
/// - `GET /save?url=<absolute-url>` - Create a mapping
/// - `GET /go?to=<token>`           - Redirect to a stored URL
pub fn shortener_routes() -> Router<AppState> {
    Router::new()
        .route("/save", get(save_handler))
        .route("/go", get(resolve_handler))
}
