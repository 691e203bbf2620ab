//! Builds a [`RequestContext`] for each handler invocation.

use axum::{extract::FromRequestParts, http::request::Parts};
use std::convert::Infallible;
use std::future::Future;

use crate::domain::context::{RequestContext, RequestId};
use crate::state::AppState;

impl FromRequestParts<AppState> for RequestContext {
    type Rejection = Infallible;

    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        // Set by the request-id middleware; routers built without it still work.
        let request_id = parts
            .extensions
            .get::<RequestId>()
            .cloned()
            .unwrap_or_else(RequestId::generate);

        std::future::ready(Ok(RequestContext::new(request_id, state.store_timeout)))
    }
}
