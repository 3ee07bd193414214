use archetype_data::Entity;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
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

pub fn person(id: i64, name: &str) -> Person {
    Person {
        id,
        name: name.into(),
        email: format!("{}@example.com", name.to_lowercase()),
    }
}
