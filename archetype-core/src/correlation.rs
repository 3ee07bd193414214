//! Correlation id middleware: propagates or generates a unique identifier per request.
//!
//! # Behavior
//!
//! 1. Reads `X-Request-Id` from the incoming request headers; if absent or not
//!    valid UTF-8, generates a UUID v4.
//! 2. Stores the id as an Axum request extension (extractable in handlers).
//! 3. Runs the rest of the request inside a `request` span carrying the id as
//!    `correlation_id`, so every log line emitted downstream is tagged with it.
//! 4. Copies the id into the response `X-Request-Id` header.
//!
//! # Usage
//!
//! ```ignore
//! use archetype_core::correlation;
//!
//! let app = correlation::install(router);
//!
//! async fn handler(id: CorrelationId) -> String {
//!     format!("request: {id}")
//! }
//! ```

use axum::extract::{FromRequestParts, Request};
use axum::http::request::Parts;
use axum::http::{HeaderName, HeaderValue};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Router;
use tracing::Instrument;

pub static X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// A request identifier, either propagated from the incoming `X-Request-Id`
/// header or generated as a UUID v4.
///
/// Implements [`FromRequestParts`] for use as a handler parameter and
/// [`Display`](std::fmt::Display) for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorrelationId(pub String);

impl CorrelationId {
    pub fn generate() -> Self {
        CorrelationId(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl<S: Send + Sync> FromRequestParts<S> for CorrelationId {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let id = parts
            .extensions
            .get::<CorrelationId>()
            .cloned()
            .unwrap_or_else(CorrelationId::generate);
        Ok(id)
    }
}

impl IntoResponse for CorrelationId {
    fn into_response(self) -> Response {
        self.0.into_response()
    }
}

/// Middleware function that injects the correlation id.
pub async fn correlation_middleware(mut req: Request, next: Next) -> Response {
    let id = req
        .headers()
        .get(&X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .filter(|s| !s.is_empty())
        .map(|s| CorrelationId(s.to_string()))
        .unwrap_or_else(CorrelationId::generate);

    req.extensions_mut().insert(id.clone());

    let span = tracing::info_span!(
        "request",
        correlation_id = %id,
        method = %req.method(),
        uri = %req.uri(),
    );
    let mut response = next.run(req).instrument(span).await;

    if let Ok(val) = HeaderValue::from_str(id.as_str()) {
        response.headers_mut().insert(X_REQUEST_ID.clone(), val);
    }

    response
}

/// Install the correlation id middleware on `router`.
pub fn install<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(axum::middleware::from_fn(correlation_middleware))
}
