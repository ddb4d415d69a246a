//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycle for each endpoint, against both the
//! in-memory store and an in-memory SQLite database.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use customer_service::{create_router, AppState, MemoryCustomerStore, SqliteCustomerStore};
use serde_json::Value;
use tower::ServiceExt;

// == Helper Functions ==

fn create_test_app() -> Router {
    create_router(AppState::new(MemoryCustomerStore::new()))
}

async fn create_sqlite_app() -> Router {
    let store = SqliteCustomerStore::in_memory().await.unwrap();
    create_router(AppState::new(store))
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

async fn create_customer(app: &Router, name: &str, age: i64) -> Value {
    let body = format!(r#"{{"name":"{name}","age":{age}}}"#);
    let (status, json) = send(app, "POST", "/customers", Some(&body)).await;
    assert_eq!(status, StatusCode::OK);
    json
}

// == CREATE Endpoint Tests ==

#[tokio::test]
async fn test_create_customer() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/customers")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"name":"Test User","age":25}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["name"].as_str().unwrap(), "Test User");
    assert_eq!(json["age"].as_i64().unwrap(), 25);
    assert!(json["id"].as_i64().unwrap() >= 0);
}

#[tokio::test]
async fn test_create_assigns_fresh_ids() {
    let app = create_sqlite_app().await;

    let first = create_customer(&app, "Test User", 25).await;
    let second = create_customer(&app, "Test User", 25).await;

    assert_ne!(first["id"], second["id"]);
}

#[tokio::test]
async fn test_create_ignores_body_id() {
    let app = create_test_app();

    let (status, json) = send(
        &app,
        "POST",
        "/customers",
        Some(r#"{"id":777,"name":"Jane Doe","age":30}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_ne!(json["id"].as_i64().unwrap(), 777);
}

#[tokio::test]
async fn test_create_malformed_body() {
    let app = create_test_app();

    let (status, json) = send(&app, "POST", "/customers", Some(r#"{"name":"#)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json.get("error").is_some());
}

#[tokio::test]
async fn test_create_without_json_content_type() {
    let app = create_test_app();

    // No content type at all
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/customers")
                .body(Body::from(r#"{"name":"Test User","age":25}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["name"].as_str().unwrap(), "Test User");
    assert_eq!(json["age"].as_i64().unwrap(), 25);

    // What `curl -d` sends by default
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/customers")
                .header("content-type", "application/x-www-form-urlencoded")
                .body(Body::from(r#"{"name":"Jane Doe","age":30}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["name"].as_str().unwrap(), "Jane Doe");
}

#[tokio::test]
async fn test_create_wrong_field_type() {
    let app = create_test_app();

    let (status, _) = send(
        &app,
        "POST",
        "/customers",
        Some(r#"{"name":"Jane Doe","age":"thirty"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// == UPDATE Endpoint Tests ==

#[tokio::test]
async fn test_update_nonexistent_customer() {
    let app = create_test_app();

    let (status, _) = send(
        &app,
        "PUT",
        "/customers/999999",
        Some(r#"{"id": 999999, "name":"Updated User","age":30}"#),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_customer() {
    let app = create_sqlite_app().await;
    let created = create_customer(&app, "Test User", 25).await;
    let id = created["id"].as_i64().unwrap();

    let (status, json) = send(
        &app,
        "PUT",
        &format!("/customers/{id}"),
        Some(r#"{"name":"Updated User","age":30}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["id"].as_i64().unwrap(), id);
    assert_eq!(json["name"].as_str().unwrap(), "Updated User");
    assert_eq!(json["age"].as_i64().unwrap(), 30);

    let (status, json) = send(&app, "GET", &format!("/customers/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"].as_str().unwrap(), "Updated User");
}

#[tokio::test]
async fn test_update_id_mismatch() {
    let app = create_test_app();
    for _ in 0..5 {
        create_customer(&app, "Filler", 1).await;
    }

    let (status, json) = send(
        &app,
        "PUT",
        "/customers/5",
        Some(r#"{"id":7,"name":"X","age":1}"#),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("ID not matched"));

    let (_, stored) = send(&app, "GET", "/customers/5", None).await;
    assert_eq!(stored["name"].as_str().unwrap(), "Filler");
}

#[tokio::test]
async fn test_update_zero_or_absent_body_id_accepted() {
    let app = create_test_app();
    for _ in 0..5 {
        create_customer(&app, "Filler", 1).await;
    }

    let (status, _) = send(
        &app,
        "PUT",
        "/customers/5",
        Some(r#"{"id":0,"name":"X","age":1}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, "PUT", "/customers/5", Some(r#"{"name":"Y","age":2}"#)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        &app,
        "PUT",
        "/customers/5",
        Some(r#"{"id":5,"name":"Z","age":3}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_update_omitted_fields_become_zero_values() {
    let app = create_sqlite_app().await;
    let created = create_customer(&app, "Jane Doe", 30).await;
    let id = created["id"].as_i64().unwrap();

    let (status, json) = send(&app, "PUT", &format!("/customers/{id}"), Some("{}")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"].as_str().unwrap(), "");
    assert_eq!(json["age"].as_i64().unwrap(), 0);
}

#[tokio::test]
async fn test_update_malformed_path_id() {
    let app = create_test_app();

    let (status, json) = send(
        &app,
        "PUT",
        "/customers/abc",
        Some(r#"{"name":"X","age":1}"#),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("Invalid customer id"));
}

#[tokio::test]
async fn test_update_without_json_content_type() {
    let app = create_test_app();
    let created = create_customer(&app, "Jane Doe", 30).await;
    let id = created["id"].as_i64().unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri(format!("/customers/{id}"))
                .header("content-type", "text/plain")
                .body(Body::from(r#"{"name":"Updated User","age":31}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["name"].as_str().unwrap(), "Updated User");
}

#[tokio::test]
async fn test_update_space_padded_path_id() {
    let app = create_test_app();
    create_customer(&app, "Jane Doe", 30).await;

    let (status, json) = send(
        &app,
        "PUT",
        "/customers/%201",
        Some(r#"{"name":"X","age":1}"#),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("Invalid customer id"));

    let (_, stored) = send(&app, "GET", "/customers/1", None).await;
    assert_eq!(stored["name"].as_str().unwrap(), "Jane Doe");
}

#[tokio::test]
async fn test_update_malformed_body() {
    let app = create_test_app();
    let created = create_customer(&app, "Jane Doe", 30).await;
    let id = created["id"].as_i64().unwrap();

    let (status, _) = send(&app, "PUT", &format!("/customers/{id}"), Some("not json")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// == DELETE Endpoint Tests ==

#[tokio::test]
async fn test_delete_customer() {
    let app = create_sqlite_app().await;
    let created = create_customer(&app, "Jane Doe", 30).await;
    let id = created["id"].as_i64().unwrap();
    let uri = format!("/customers/{id}");

    let (status, json) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json[format!("id #{id}")].as_str().unwrap(), "deleted");

    // Verify it's gone
    let (status, _) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Deleting again is not a success
    let (status, _) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_not_found() {
    let app = create_test_app();

    let (status, _) = send(&app, "DELETE", "/customers/424242", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", "/customers/not-a-number", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// == GET Endpoint Tests ==

#[tokio::test]
async fn test_get_customer() {
    let app = create_sqlite_app().await;
    let created = create_customer(&app, "Jane Doe", 30).await;
    let id = created["id"].as_i64().unwrap();

    let (status, json) = send(&app, "GET", &format!("/customers/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"].as_str().unwrap(), "Jane Doe");
    assert_eq!(json["age"].as_i64().unwrap(), 30);

    let (status, _) = send(&app, "GET", "/customers/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// == HEALTH Endpoint Tests ==

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app();

    let (status, json) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"].as_str().unwrap(), "healthy");
    assert!(json.get("timestamp").is_some());
}

// == Store Fault Tests ==

#[tokio::test]
async fn test_store_fault_is_server_error() {
    let store = SqliteCustomerStore::in_memory().await.unwrap();
    let app = create_router(AppState::new(store.clone()));
    store.close().await;

    let (status, json) = send(&app, "GET", "/customers/1", None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"].as_str().unwrap(), "Database error");
}
