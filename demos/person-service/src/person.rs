use archetype_data::Entity;
use archetype_data_sqlx::{Args, SqlxEntity};
use serde::{Deserialize, Serialize};
use sqlx::query::Query;
use sqlx::Sqlite;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Person {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl Entity for Person {
    type Id = i64;

    fn table_name() -> &'static str {
        "persons"
    }

    fn id_column() -> &'static str {
        "id"
    }

    fn columns() -> &'static [&'static str] {
        &["id", "name", "email"]
    }

    fn id(&self) -> &i64 {
        &self.id
    }
}

impl SqlxEntity<Sqlite> for Person {
    fn bind_columns<'q>(&'q self, query: Query<'q, Sqlite, Args<'q, Sqlite>>) -> Query<'q, Sqlite, Args<'q, Sqlite>> {
        query.bind(self.id).bind(&self.name).bind(&self.email)
    }
}
