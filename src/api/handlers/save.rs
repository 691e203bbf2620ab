//! Handler for the URL shortening endpoint.

use axum::extract::{Query, State};

use crate::api::dto::query::SaveParams;
use crate::domain::context::RequestContext;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a token for the URL given in the query string.
///
/// # Endpoint
///
/// `GET /save?url=<absolute-url>`
///
/// # Response
///
/// `200 OK` with the plain-text body `Your new url is: {token}`.
///
/// # Errors
///
/// Returns 400 Bad Request with `Could not parse URL: "{url}"` if the URL is
/// not absolute.
/// Returns 500 Internal Server Error if the store rejects the mapping.
pub async fn save_handler(
    State(state): State<AppState>,
    ctx: RequestContext,
    Query(params): Query<SaveParams>,
) -> Result<String, AppError> {
    let mapping = state.shortener.save_url(&ctx, &params.url).await?;

    Ok(format!("Your new url is: {}", mapping.token))
}
