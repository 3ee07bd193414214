//! Nullable JSON body extraction.
//!
//! [`Payload<T>`] is the body extractor used by every CRUD handler. Unlike
//! `axum::Json`, a missing body is not a rejection: an empty body, a
//! whitespace-only body, or the JSON literal `null` all yield `Payload(None)`,
//! leaving the handler to decide which status an absent argument deserves.
//! A body that is present but does not deserialize into `T` is rejected
//! with `400 Bad Request`.

use axum::extract::{FromRequest, Request};
use bytes::Bytes;
use serde::de::DeserializeOwned;

use crate::error::HttpError;

#[derive(Debug, Clone, PartialEq)]
pub struct Payload<T>(pub Option<T>);

impl<T: DeserializeOwned> Payload<T> {
    /// Decode a raw request body.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, HttpError> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Payload(None));
        }
        serde_json::from_slice::<Option<T>>(bytes)
            .map(Payload)
            .map_err(|e| HttpError::BadRequest(format!("Invalid JSON payload: {e}")))
    }
}

impl<T> Payload<T> {
    pub fn into_inner(self) -> Option<T> {
        self.0
    }
}

impl<T, S> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| HttpError::BadRequest(e.body_text()))?;
        Payload::from_bytes(&bytes)
    }
}
