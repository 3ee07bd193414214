mod app;
mod repository;

pub use app::{TestApp, TestRequest, TestResponse};
pub use repository::{InMemoryRepository, WriteMode};
