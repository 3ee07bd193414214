//! # archetype-crud
//!
//! One generic request handler per entity type: [`CrudArchetype<T, R>`]
//! forwards create, read, update and delete straight to a
//! [`Repository`](archetype_data::Repository) and answers with 200, 400 or 500.
//!
//! ```ignore
//! let repo = SqlxRepository::<Person, Sqlite>::new(pool)?;
//! let app = layers::standard(CrudArchetype::new(repo).mount("/persons"));
//! archetype_core::serve(app, "0.0.0.0:8080").await?;
//! ```

pub mod archetype;
pub mod router;

pub use archetype::CrudArchetype;
