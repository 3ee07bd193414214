//! Path parameter extraction with JSON rejections.
//!
//! `axum::extract::Path` answers an unparseable segment with a plain-text
//! 400. [`PathId<T>`] wraps it so the rejection goes through [`HttpError`]
//! and keeps the `{"error": ...}` body every other failure uses.

use axum::extract::rejection::PathRejection;
use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use crate::error::HttpError;

#[derive(Debug, Clone, PartialEq)]
pub struct PathId<T>(pub T);

impl From<PathRejection> for HttpError {
    fn from(rejection: PathRejection) -> Self {
        HttpError::BadRequest(rejection.body_text())
    }
}

impl<T, S> FromRequestParts<S> for PathId<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<T>::from_request_parts(parts, state).await?;
        Ok(PathId(id))
    }
}
