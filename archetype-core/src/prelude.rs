//! Re-exports of the types a CRUD service touches most.

pub use crate::{ArchetypeConfig, CorrelationId, HttpError, PathId, Payload, ServerSettings};
pub use axum::extract::{Path, State};
pub use axum::http::StatusCode;
pub use axum::response::{IntoResponse, Response};
pub use axum::{Json, Router};
