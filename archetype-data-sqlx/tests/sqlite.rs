use archetype_data::{Entity, Repository};
use archetype_data_sqlx::{Args, SqlxEntity, SqlxRepository};
use sqlx::query::Query;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Sqlite, SqlitePool};

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
struct Person {
    id: i64,
    name: String,
    email: String,
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

fn person(id: i64, name: &str) -> Person {
    Person {
        id,
        name: name.into(),
        email: format!("{}@example.com", name.to_lowercase()),
    }
}

async fn setup() -> SqlxRepository<Person, Sqlite> {
    let pool: SqlitePool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    sqlx::query("CREATE TABLE persons (id INTEGER PRIMARY KEY, name TEXT NOT NULL, email TEXT NOT NULL)")
        .execute(&pool)
        .await
        .unwrap();
    SqlxRepository::new(pool).unwrap()
}

#[tokio::test]
async fn persist_then_find() {
    let repo = setup().await;
    let alice = person(1, "Alice");

    repo.persist(&alice).await.unwrap();

    assert!(repo.is_persistent(&alice).await.unwrap());
    assert_eq!(repo.find_by_id(&1).await.unwrap(), Some(alice));
}

#[tokio::test]
async fn find_missing_is_none() {
    let repo = setup().await;
    assert_eq!(repo.find_by_id(&404).await.unwrap(), None);
    assert!(!repo.is_persistent(&person(404, "Ghost")).await.unwrap());
}

#[tokio::test]
async fn persist_existing_id_overwrites() {
    let repo = setup().await;
    repo.persist(&person(1, "Alice")).await.unwrap();

    let renamed = Person {
        name: "Alicia".into(),
        ..person(1, "Alice")
    };
    repo.persist(&renamed).await.unwrap();

    assert_eq!(repo.find_by_id(&1).await.unwrap(), Some(renamed));
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM persons")
        .fetch_one(repo.pool())
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn delete_removes_row() {
    let repo = setup().await;
    let bob = person(2, "Bob");
    repo.persist(&bob).await.unwrap();

    assert!(repo.delete(&bob).await.unwrap());
    assert!(!repo.is_persistent(&bob).await.unwrap());
    assert!(!repo.delete(&bob).await.unwrap());
}

#[tokio::test]
async fn missing_table_is_database_error() {
    let repo = setup().await;
    sqlx::query("DROP TABLE persons")
        .execute(repo.pool())
        .await
        .unwrap();

    let err = repo.persist(&person(3, "Carol")).await.unwrap_err();
    assert!(matches!(err, archetype_data::DataError::Database(_)));
}

#[tokio::test]
async fn statements_use_sqlite_placeholders() {
    let repo = setup().await;
    assert_eq!(
        repo.statements().delete_by_id,
        "DELETE FROM \"persons\" WHERE \"id\" = ?"
    );
}
