//! A person directory served by one CRUD archetype over SQLite.

use std::str::FromStr;

use archetype_core::prelude::Router;
use archetype_core::{layers, ServerSettings};
use archetype_crud::CrudArchetype;
use archetype_data_sqlx::SqlxRepository;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

pub mod person;

pub use person::Person;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Open the pool described by `settings` and bring the schema up to date.
pub async fn connect(settings: &ServerSettings) -> Result<SqlitePool, BoxError> {
    let options = SqliteConnectOptions::from_str(&settings.database_url)?.create_if_missing(true);
    let mut pool_options = SqlitePoolOptions::new().max_connections(settings.database_connections);
    if settings.database_url.contains(":memory:") {
        // An in-memory database lives and dies with its connection.
        pool_options = pool_options.idle_timeout(None).max_lifetime(None);
    }
    let pool = pool_options.connect_with(options).await?;
    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!(url = %settings.database_url, "database ready");
    Ok(pool)
}

/// The full application router: person CRUD under the configured base path,
/// wrapped in the standard layer stack.
pub fn app(pool: SqlitePool, settings: &ServerSettings) -> Result<Router, BoxError> {
    let repository = SqlxRepository::<Person, sqlx::Sqlite>::new(pool)?;
    let router = CrudArchetype::new(repository).mount(&settings.base_path);
    Ok(layers::standard(router))
}
