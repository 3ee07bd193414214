//! # archetype-core
//!
//! Runtime pieces shared by every CRUD archetype service:
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | [`HttpError`], the JSON error response of all handlers |
//! | [`correlation`] | [`CorrelationId`] extractor and the `X-Request-Id` middleware |
//! | [`payload`] | [`Payload<T>`], a JSON body extractor where absent means `None` |
//! | [`path`] | [`PathId<T>`], a path parameter extractor with JSON rejections |
//! | [`layers`] | Tracing subscriber setup and the standard tower layer stack |
//! | [`config`] | [`ArchetypeConfig`] (YAML + `.env` + environment) and [`ServerSettings`] |
//! | [`server`] | Serve a router with graceful shutdown |

pub mod config;
pub mod correlation;
pub mod error;
pub mod layers;
pub mod path;
pub mod payload;
pub mod prelude;
pub mod server;

pub use config::{ArchetypeConfig, ConfigError, ConfigValue, FromConfigValue, LogFormat, ServerSettings};
pub use correlation::CorrelationId;
pub use error::{error_response, HttpError};
pub use layers::{default_trace, init_tracing};
pub use path::PathId;
pub use payload::Payload;
pub use server::serve;
