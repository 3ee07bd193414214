mod common;

use archetype_core::layers;
use archetype_crud::CrudArchetype;
use archetype_data_sqlx::{Args, SqlxEntity, SqlxRepository};
use archetype_test::TestApp;
use common::{person, Person};
use sqlx::query::Query;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::Sqlite;

impl SqlxEntity<Sqlite> for Person {
    fn bind_columns<'q>(&'q self, query: Query<'q, Sqlite, Args<'q, Sqlite>>) -> Query<'q, Sqlite, Args<'q, Sqlite>> {
        query.bind(self.id).bind(&self.name).bind(&self.email)
    }
}

async fn setup() -> (TestApp, SqlxRepository<Person, Sqlite>) {
    let pool = SqlitePoolOptions::new()
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
    let repo = SqlxRepository::<Person, Sqlite>::new(pool).unwrap();
    let app = TestApp::new(layers::standard(CrudArchetype::new(repo.clone()).mount("/persons")));
    (app, repo)
}

#[tokio::test]
async fn full_lifecycle_against_sqlite() {
    let (app, _repo) = setup().await;
    let alice = person(1, "Alice");

    app.post("/persons").json(&alice).send().await.assert_ok();

    let found: Person = app.get("/persons/1").send().await.assert_ok().json();
    assert_eq!(found, alice);

    let renamed = Person {
        name: "Alicia".into(),
        ..alice.clone()
    };
    app.put("/persons/1").json(&renamed).send().await.assert_ok();
    let found: Person = app.get("/persons").json(&1).send().await.assert_ok().json();
    assert_eq!(found.name, "Alicia");

    app.delete("/persons/1").json(&renamed).send().await.assert_ok();
    app.get("/persons/1").send().await.assert_bad_request();
}

#[tokio::test]
async fn create_twice_with_same_id_keeps_one_row() {
    let (app, repo) = setup().await;

    app.post("/persons").json(&person(1, "Alice")).send().await.assert_ok();
    app.post("/persons").json(&person(1, "Alice")).send().await.assert_ok();

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM persons")
        .fetch_one(repo.pool())
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn database_failure_is_server_error() {
    let (app, repo) = setup().await;
    sqlx::query("DROP TABLE persons")
        .execute(repo.pool())
        .await
        .unwrap();

    app.post("/persons")
        .json(&person(1, "Alice"))
        .send()
        .await
        .assert_server_error();
    app.get("/persons/1").send().await.assert_server_error();
}
