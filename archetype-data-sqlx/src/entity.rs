use archetype_data::Entity;
use sqlx::query::Query;
use sqlx::{Database, FromRow};

/// Arguments type of a plain `sqlx::query` for `DB`.
pub type Args<'q, DB> = <DB as Database>::Arguments<'q>;

/// An [`Entity`] that can be written to and read from `DB` through SQLx.
///
/// `bind_columns` must bind one value per entry of `Entity::columns()`, in
/// the same order; the repository's upsert statement relies on it.
///
/// ```ignore
/// impl SqlxEntity<Sqlite> for Person {
///     fn bind_columns<'q>(&'q self, query: Query<'q, Sqlite, Args<'q, Sqlite>>)
///         -> Query<'q, Sqlite, Args<'q, Sqlite>>
///     {
///         query.bind(&self.id).bind(&self.name).bind(&self.email)
///     }
/// }
/// ```
pub trait SqlxEntity<DB: Database>: Entity + for<'r> FromRow<'r, DB::Row> {
    fn bind_columns<'q>(&'q self, query: Query<'q, DB, Args<'q, DB>>) -> Query<'q, DB, Args<'q, DB>>;
}
