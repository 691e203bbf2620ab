//! Request identifier middleware.

use axum::{
    extract::{ConnectInfo, Request},
    http::{HeaderMap, HeaderName, HeaderValue, header},
    middleware::Next,
    response::Response,
};
use std::net::SocketAddr;
use tracing::{Instrument, field};

use crate::domain::context::RequestId;

/// Header carrying the request id in both directions.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Alternate request id header, accepted on input and echoed alongside.
pub const ALT_REQUEST_ID_HEADER: &str = "request-id";

/// Longest client-supplied id that is reused as-is.
const MAX_REQUEST_ID_LEN: usize = 128;

/// Assigns a [`RequestId`] to every request.
///
/// # Behavior
///
/// - Reuses the incoming `x-request-id` (or `Request-Id`) header when present
///   and sane
/// - Otherwise generates a new id
/// - Stores the id as a request extension for handlers
/// - Runs the rest of the stack inside a `req{request_id ip user_agent referer}`
///   span; `ip` needs the server to be built with
///   `into_make_service_with_connect_info::<SocketAddr>()`
/// - Echoes the id in the response `x-request-id` and `request-id` headers
///
/// # Integration
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/save", get(save_handler))
///     .layer(middleware::from_fn(request_id::layer));
/// ```
pub async fn layer(mut req: Request, next: Next) -> Response {
    let request_id = incoming_request_id(req.headers())
        .map(RequestId::new)
        .unwrap_or_else(RequestId::generate);

    req.extensions_mut().insert(request_id.clone());

    let span = tracing::info_span!(
        "req",
        request_id = %request_id,
        ip = field::Empty,
        user_agent = field::Empty,
        referer = field::Empty,
    );
    if let Some(ConnectInfo(addr)) = req.extensions().get::<ConnectInfo<SocketAddr>>() {
        span.record("ip", field::display(addr.ip()));
    }
    if let Some(agent) = header_str(req.headers(), header::USER_AGENT) {
        span.record("user_agent", agent);
    }
    if let Some(referer) = header_str(req.headers(), header::REFERER) {
        span.record("referer", referer);
    }

    let mut response = next.run(req).instrument(span).await;

    if let Ok(value) = HeaderValue::from_str(request_id.as_str()) {
        let headers = response.headers_mut();
        headers.insert(HeaderName::from_static(ALT_REQUEST_ID_HEADER), value.clone());
        headers.insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
    }

    response
}

fn incoming_request_id(headers: &HeaderMap) -> Option<&str> {
    [REQUEST_ID_HEADER, ALT_REQUEST_ID_HEADER]
        .into_iter()
        .filter_map(|name| headers.get(name))
        .filter_map(|v| v.to_str().ok())
        .find(|v| !v.is_empty() && v.len() <= MAX_REQUEST_ID_LEN)
}

fn header_str(headers: &HeaderMap, name: HeaderName) -> Option<&str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}
