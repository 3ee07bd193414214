use axum::body::Body;
use axum::Router;
use bytes::Bytes;
use http::header::{HeaderMap, HeaderName, IntoHeaderName, CONTENT_TYPE};
use http::{HeaderValue, Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tower::util::ServiceExt;

const REQUEST_ID: &str = "x-request-id";

/// In-process HTTP client over a CRUD router.
///
/// Requests go through `tower::ServiceExt::oneshot` on a clone of the router,
/// so no port is bound and every layer (correlation, tracing, panic catching)
/// runs exactly as it would behind a listener.
///
/// ```ignore
/// let app = TestApp::new(layers::standard(crud.mount("/persons")));
/// app.post("/persons").json(&alice).send().await.assert_ok();
/// app.get("/persons/9").send().await.assert_error(StatusCode::BAD_REQUEST, "Entity 9 not found");
/// ```
pub struct TestApp {
    router: Router,
}

impl TestApp {
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    pub fn get(&self, path: &str) -> TestRequest<'_> {
        self.request(Method::GET, path)
    }

    pub fn post(&self, path: &str) -> TestRequest<'_> {
        self.request(Method::POST, path)
    }

    pub fn put(&self, path: &str) -> TestRequest<'_> {
        self.request(Method::PUT, path)
    }

    pub fn delete(&self, path: &str) -> TestRequest<'_> {
        self.request(Method::DELETE, path)
    }

    fn request(&self, method: Method, path: &str) -> TestRequest<'_> {
        TestRequest {
            app: self,
            method,
            path: path.to_string(),
            headers: HeaderMap::new(),
            body: Vec::new(),
        }
    }
}

/// A request under construction. Without a body setter it is sent empty,
/// which the CRUD handlers read as an absent argument.
pub struct TestRequest<'a> {
    app: &'a TestApp,
    method: Method,
    path: String,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl<'a> TestRequest<'a> {
    pub fn header(mut self, name: impl IntoHeaderName, value: impl AsRef<str>) -> Self {
        let value = HeaderValue::from_str(value.as_ref())
            .unwrap_or_else(|e| panic!("invalid header value {:?}: {e}", value.as_ref()));
        self.headers.insert(name, value);
        self
    }

    /// Propagate a caller-chosen correlation id.
    pub fn request_id(self, id: &str) -> Self {
        self.header(REQUEST_ID, id)
    }

    /// Serialize `body` as the JSON payload.
    pub fn json(self, body: &impl Serialize) -> Self {
        let bytes = serde_json::to_vec(body).expect("test payload must serialize");
        self.json_text(bytes)
    }

    /// Send the JSON literal `null`.
    pub fn null(self) -> Self {
        self.json_text("null")
    }

    /// Send raw bytes tagged as JSON, for malformed payloads.
    pub fn json_text(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        self.body = body.into();
        self
    }

    /// Raw body, no content type.
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    pub async fn send(self) -> TestResponse {
        let mut request = Request::builder()
            .method(self.method)
            .uri(&self.path)
            .body(Body::from(self.body))
            .expect("test request must build");
        *request.headers_mut() = self.headers;

        let response = self
            .app
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let (parts, body) = response.into_parts();
        let body = body
            .collect()
            .await
            .expect("failed to read response body")
            .to_bytes();

        TestResponse {
            status: parts.status,
            headers: parts.headers,
            body,
        }
    }
}

/// A fully buffered response.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn assert_ok(self) -> Self {
        self.assert_status(StatusCode::OK)
    }

    pub fn assert_bad_request(self) -> Self {
        self.assert_status(StatusCode::BAD_REQUEST)
    }

    pub fn assert_server_error(self) -> Self {
        self.assert_status(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn assert_status(self, expected: StatusCode) -> Self {
        assert_eq!(
            self.status,
            expected,
            "{} {}: expected {expected}, body: {}",
            self.status,
            self.request_id().unwrap_or("-"),
            self.text()
        );
        self
    }

    /// Assert both the status and the `{"error": ...}` message.
    pub fn assert_error(self, status: StatusCode, message: &str) -> Self {
        let response = self.assert_status(status);
        assert_eq!(response.error().as_deref(), Some(message));
        response
    }

    pub fn header(&self, name: impl AsRef<str>) -> Option<&str> {
        let name: HeaderName = name.as_ref().parse().ok()?;
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// The correlation id echoed back by the server.
    pub fn request_id(&self) -> Option<&str> {
        self.header(REQUEST_ID)
    }

    /// The message of a JSON error body, if this is one.
    pub fn error(&self) -> Option<String> {
        let value: serde_json::Value = serde_json::from_slice(&self.body).ok()?;
        value.get("error")?.as_str().map(str::to_owned)
    }

    pub fn json<T: DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body)
            .unwrap_or_else(|e| panic!("Failed to parse JSON: {e}\nBody: {}", self.text()))
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}
