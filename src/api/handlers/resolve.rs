//! Handler for token redirects.

use axum::{
    extract::{Query, State},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use tracing::error;

use crate::api::dto::query::ResolveParams;
use crate::domain::context::RequestContext;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a token to its stored URL.
///
/// # Endpoint
///
/// `GET /go?to=<token>`
///
/// # Response
///
/// `307 Temporary Redirect` with `Location` set to the stored URL. The
/// redirect is temporary because a mapping is looked up on every visit rather
/// than cached by clients as a permanent alias.
///
/// # Errors
///
/// Returns 404 Not Found if the token is unknown.
/// Returns 500 Internal Server Error on store failures, or if the stored
/// value cannot be used as a header.
pub async fn resolve_handler(
    State(state): State<AppState>,
    ctx: RequestContext,
    Query(params): Query<ResolveParams>,
) -> Result<impl IntoResponse, AppError> {
    let url = state.shortener.resolve_url(&ctx, &params.to).await?;

    let location = HeaderValue::try_from(url.as_str()).map_err(|e| {
        error!(request_id = %ctx.request_id(), token = %params.to, error = %e, "stored URL is not a valid Location header");
        AppError::InvalidRedirect {
            token: params.to.clone(),
        }
    })?;

    Ok((StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, location)]))
}
