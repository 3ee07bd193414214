//! # archetype-data-sqlx: SQLx backend for the archetype data layer
//!
//! This crate provides the [SQLx](https://github.com/launchbadge/sqlx)-specific
//! implementation of [`archetype_data::Repository`]. It depends on
//! `archetype-data` for the abstract traits, the SQL statement rendering, and
//! `DataError`, and adds the repository, the per-call transaction wrapper, and
//! the error bridging needed to talk to a real database.
//!
//! # What's in this crate
//!
//! | Type | Description |
//! |------|-------------|
//! | [`SqlxRepository`] | `Repository` over an `sqlx::Pool<DB>` |
//! | [`SqlxEntity`] | Binds an entity's columns onto an SQLx query |
//! | [`Tx`] | Transaction wrapper: commit explicitly, roll back on drop |
//! | [`SqlxErrorExt`] | Extension trait to convert `sqlx::Error` → `DataError` (`.into_data_error()`) |
//! | [`SqlxResult<T>`] | Type alias for `Result<T, DataError>` |
//!
//! # Feature flags
//!
//! | Feature    | Driver |
//! |------------|--------|
//! | `sqlite`   | SQLite via `sqlx/sqlite` |
//! | `postgres` | PostgreSQL via `sqlx/postgres` |
//! | `mysql`    | MySQL via `sqlx/mysql` |
//!
//! # Quick start
//!
//! ```ignore
//! use archetype_data_sqlx::{Args, SqlxEntity, SqlxRepository};
//! use sqlx::query::Query;
//! use sqlx::Sqlite;
//!
//! impl SqlxEntity<Sqlite> for Person {
//!     fn bind_columns<'q>(&'q self, query: Query<'q, Sqlite, Args<'q, Sqlite>>)
//!         -> Query<'q, Sqlite, Args<'q, Sqlite>>
//!     {
//!         query.bind(&self.id).bind(&self.name).bind(&self.email)
//!     }
//! }
//!
//! let repo = SqlxRepository::<Person, Sqlite>::new(pool.clone())?;
//! ```

pub mod entity;
pub mod error;
pub mod repository;
pub mod tx;

pub use entity::{Args, SqlxEntity};
pub use error::{SqlxErrorExt, SqlxResult};
pub use repository::{SqlxDialect, SqlxRepository};
pub use tx::Tx;

/// Re-exports of the most commonly used types from both `archetype-data` and this crate.
pub mod prelude {
    pub use crate::{Args, SqlxEntity, SqlxErrorExt, SqlxRepository, Tx};
    pub use archetype_data::prelude::*;
}
