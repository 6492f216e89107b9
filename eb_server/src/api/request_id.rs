//! Request ID middleware for tracing and debugging.
//!
//! Every request is tagged with an id, taken from the incoming
//! `x-request-id` header or freshly generated, which is echoed on the
//! response and attached to the request's log records and metrics.

use crate::metrics;
use axum::{
    extract::{FromRequestParts, MatchedPath, Request},
    http::{HeaderMap, HeaderValue, StatusCode, request::Parts},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use uuid::Uuid;

/// Header name for request ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Metrics path label for requests that matched no route
pub const UNMATCHED_PATH: &str = "unmatched";

/// Generate or extract request ID from headers
fn get_or_generate_request_id(headers: &HeaderMap) -> String {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}

/// Route template used as the metrics path label.
///
/// Raw URIs are never used as labels, so unknown paths share one series.
fn metrics_path(request: &Request) -> String {
    request
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_string())
        .unwrap_or_else(|| UNMATCHED_PATH.to_string())
}

/// Middleware to add request ID to all requests and responses
///
/// This middleware:
/// 1. Extracts existing request ID from header or generates a new one
/// 2. Makes request ID available to handlers via [`RequestId`]
/// 3. Adds request ID to response headers
/// 4. Records request count and duration metrics
///
/// # Example
///
/// ```no_run
/// use axum::{Router, routing::get, middleware};
/// use eb_server::api::request_id::request_id_middleware;
///
/// let app: Router = Router::new()
///     .route("/", get(|| async { "Hello" }))
///     .layer(middleware::from_fn(request_id_middleware));
/// ```
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = get_or_generate_request_id(request.headers());
    let method = request.method().to_string();
    let path = metrics_path(&request);
    let started = Instant::now();

    request.extensions_mut().insert(RequestId(request_id.clone()));

    tracing::info!(
        request_id = %request_id,
        method = %method,
        uri = %request.uri(),
        "Request started"
    );

    let mut response = next.run(request).await;

    if let Ok(header_value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, header_value);
    }

    let status = response.status();
    let duration_ms = started.elapsed().as_secs_f64() * 1000.0;
    metrics::http_requests_total(&method, &path, status.as_u16());
    metrics::http_request_duration_ms(&method, &path, duration_ms);

    tracing::info!(
        request_id = %request_id,
        status = %status,
        duration_ms = duration_ms,
        "Request completed"
    );

    response
}

/// Request ID wrapper for extracting from request extensions
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestId(pub String);

impl RequestId {
    /// Get the request ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Axum extractor for request ID
impl<S> FromRequestParts<S> for RequestId
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<RequestId>().cloned().ok_or((
            StatusCode::INTERNAL_SERVER_ERROR,
            "Request ID not found in extensions",
        ))
    }
}
