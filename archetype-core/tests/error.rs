use archetype_core::HttpError;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;

async fn error_parts(err: HttpError) -> (StatusCode, serde_json::Value) {
    let resp = err.into_response();
    let status = resp.status();
    let body = resp.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    (status, json)
}

#[tokio::test]
async fn http_error_bad_request_status() {
    let (status, body) = error_parts(HttpError::BadRequest("entity not found".into())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "entity not found");
}

#[tokio::test]
async fn http_error_internal_status() {
    let (status, body) = error_parts(HttpError::Internal("entity not present".into())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "entity not present");
}

#[test]
fn http_error_display() {
    assert_eq!(HttpError::BadRequest("x".into()).to_string(), "Bad Request: x");
    assert_eq!(HttpError::Internal("y".into()).to_string(), "Internal Error: y");
}

#[test]
fn http_error_status_accessor() {
    assert_eq!(HttpError::BadRequest(String::new()).status(), StatusCode::BAD_REQUEST);
    assert_eq!(HttpError::Internal(String::new()).status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn config_error_maps_to_internal() {
    let err: HttpError = archetype_core::ConfigError::NotFound("database.url".into()).into();
    assert!(matches!(err, HttpError::Internal(msg) if msg.contains("database.url")));
}
