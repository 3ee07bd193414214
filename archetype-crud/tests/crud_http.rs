mod common;

use archetype_core::layers;
use archetype_crud::CrudArchetype;
use archetype_test::{InMemoryRepository, TestApp};
use common::{person, Person};
use http::StatusCode;

fn app_with(repo: InMemoryRepository<Person>) -> TestApp {
    TestApp::new(layers::standard(CrudArchetype::new(repo).mount("/persons")))
}

fn app() -> (TestApp, InMemoryRepository<Person>) {
    let repo = InMemoryRepository::new();
    (app_with(repo.clone()), repo)
}

// ── create ──

#[tokio::test]
async fn create_persists_and_returns_entity() {
    let (app, repo) = app();
    let alice = person(1, "Alice");

    let resp = app.post("/persons").json(&alice).send().await.assert_ok();

    assert_eq!(resp.json::<Person>(), alice);
    assert_eq!(repo.get(&1), Some(alice));
}

#[tokio::test]
async fn create_without_body_is_server_error() {
    let (app, repo) = app();

    app.post("/persons")
        .send()
        .await
        .assert_error(StatusCode::INTERNAL_SERVER_ERROR, "Entity not present");
    assert!(repo.is_empty());
}

#[tokio::test]
async fn create_with_null_body_is_server_error() {
    let (app, _) = app();
    app.post("/persons").null().send()
        .await
        .assert_server_error();
}

#[tokio::test]
async fn create_not_persisted_is_bad_request() {
    let app = app_with(InMemoryRepository::rejecting());
    app.post("/persons")
        .json(&person(1, "Alice"))
        .send()
        .await
        .assert_error(StatusCode::BAD_REQUEST, "Entity not persisted");
}

#[tokio::test]
async fn create_with_malformed_body_is_bad_request() {
    let (app, repo) = app();
    app.post("/persons")
        .json_text(r#"{"id": "not-a-number"}"#)
        .send()
        .await
        .assert_bad_request();
    assert!(repo.is_empty());
}

#[tokio::test]
async fn create_with_failing_store_is_server_error() {
    let app = app_with(InMemoryRepository::failing());
    app.post("/persons")
        .json(&person(1, "Alice"))
        .send()
        .await
        .assert_server_error();
}

// ── read ──

#[tokio::test]
async fn read_by_body_id() {
    let (app, repo) = app();
    repo.insert(person(7, "Grace"));

    let resp = app.get("/persons").json(&7).send().await.assert_ok();
    assert_eq!(resp.json::<Person>(), person(7, "Grace"));
}

#[tokio::test]
async fn read_by_path_id() {
    let (app, repo) = app();
    repo.insert(person(7, "Grace"));

    let resp = app.get("/persons/7").send().await.assert_ok();
    assert_eq!(resp.json::<Person>().name, "Grace");
}

#[tokio::test]
async fn read_unknown_id_is_bad_request() {
    let (app, _) = app();
    app.get("/persons/404")
        .send()
        .await
        .assert_error(StatusCode::BAD_REQUEST, "Entity 404 not found");
    app.get("/persons").json(&404).send().await.assert_bad_request();
}

#[tokio::test]
async fn read_without_id_is_bad_request() {
    let (app, repo) = app();
    repo.insert(person(1, "Alice"));
    app.get("/persons").send().await.assert_bad_request();
}

#[tokio::test]
async fn unparseable_path_id_is_json_bad_request() {
    let (app, repo) = app();
    repo.insert(person(1, "Alice"));

    let resp = app.get("/persons/abc").send().await.assert_bad_request();
    assert_eq!(resp.header("content-type"), Some("application/json"));
    assert!(resp.error().is_some_and(|msg| msg.contains("abc")));

    let resp = app
        .put("/persons/abc")
        .json(&person(1, "Alicia"))
        .send()
        .await
        .assert_bad_request();
    assert!(resp.error().is_some());
    assert_eq!(repo.get(&1), Some(person(1, "Alice")));

    let resp = app
        .delete("/persons/abc")
        .json(&person(1, "Alice"))
        .send()
        .await
        .assert_bad_request();
    assert!(resp.error().is_some());
    assert_eq!(repo.len(), 1);
}

// ── update ──

#[tokio::test]
async fn update_overwrites_entity() {
    let (app, repo) = app();
    repo.insert(person(1, "Alice"));
    let renamed = Person {
        name: "Alicia".into(),
        ..person(1, "Alice")
    };

    let resp = app.put("/persons/1").json(&renamed).send().await.assert_ok();

    assert_eq!(resp.json::<Person>(), renamed);
    assert_eq!(repo.get(&1), Some(renamed));
}

#[tokio::test]
async fn update_ignores_path_id() {
    let (app, repo) = app();
    repo.insert(person(1, "Alice"));
    let body = person(2, "Bob");

    app.put("/persons/1").json(&body).send().await.assert_ok();

    // Row 1 is untouched; the entity was stored under its own id.
    assert_eq!(repo.get(&1), Some(person(1, "Alice")));
    assert_eq!(repo.get(&2), Some(body));
}

#[tokio::test]
async fn update_without_body_is_bad_request() {
    let (app, _) = app();
    app.put("/persons/1").send().await.assert_bad_request();
}

// ── delete ──

#[tokio::test]
async fn delete_removes_entity_and_echoes_it() {
    let (app, repo) = app();
    let alice = person(1, "Alice");
    repo.insert(alice.clone());

    let resp = app.delete("/persons/1").json(&alice).send().await.assert_ok();

    assert_eq!(resp.json::<Person>(), alice);
    assert!(repo.is_empty());
}

#[tokio::test]
async fn delete_ignores_path_id() {
    let (app, repo) = app();
    repo.insert(person(1, "Alice"));
    repo.insert(person(2, "Bob"));

    app.delete("/persons/1")
        .json(&person(2, "Bob"))
        .send()
        .await
        .assert_ok();

    assert_eq!(repo.get(&1), Some(person(1, "Alice")));
    assert_eq!(repo.get(&2), None);
}

#[tokio::test]
async fn delete_without_body_is_bad_request() {
    let (app, repo) = app();
    repo.insert(person(1, "Alice"));

    app.delete("/persons/1").send().await.assert_bad_request();
    assert_eq!(repo.len(), 1);
}

// ── correlation ──

#[tokio::test]
async fn responses_carry_correlation_id() {
    let (app, _) = app();

    let resp = app
        .get("/persons/1")
        .request_id("trace-me")
        .send()
        .await
        .assert_bad_request();
    assert_eq!(resp.request_id(), Some("trace-me"));

    let resp = app.post("/persons").json(&person(3, "Carol")).send().await.assert_ok();
    assert!(resp.request_id().is_some());
}

// ── mounting ──

#[tokio::test]
async fn mount_at_root() {
    let repo = InMemoryRepository::new();
    repo.insert(person(5, "Eve"));
    let app = TestApp::new(CrudArchetype::new(repo).mount("/"));

    app.get("/5").send().await.assert_ok();
}

#[tokio::test]
async fn mount_normalizes_slashes() {
    let repo = InMemoryRepository::new();
    repo.insert(person(5, "Eve"));
    let app = TestApp::new(CrudArchetype::new(repo).mount("api/persons/"));

    app.get("/api/persons/5").send().await.assert_ok();
}
