//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use sea_orm::ConnectOptions;
use serde_json::Value;
use tower::ServiceExt;

use taskflow::api::{create_router, AppState};
use taskflow::config::Config;
use taskflow::infra::Database;

/// Fresh in-memory SQLite database with all migrations applied.
///
/// A single pooled connection keeps the in-memory database alive and shared.
pub async fn test_database() -> Arc<Database> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let connection = sea_orm::Database::connect(options)
        .await
        .expect("connect to in-memory sqlite");
    let db = Database::from_connection(connection);
    db.run_migrations().await.expect("run migrations");
    Arc::new(db)
}

/// Router over a fresh database
pub async fn test_app() -> (Router, Arc<Database>) {
    let db = test_database().await;
    let state = AppState::from_config(db.clone(), &Config::default());
    (create_router(state), db)
}

/// Send a request and decode the JSON response body (`Null` when empty)
pub async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("build request");

    let response = router.clone().oneshot(request).await.expect("send request");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

/// Create an employee through the API and return its id
pub async fn create_employee(router: &Router, name: &str, department: &str) -> i64 {
    let (status, body) = send(
        router,
        Method::POST,
        "/employees",
        Some(serde_json::json!({
            "name": name,
            "role": "Engineer",
            "department": department,
            "email": format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create employee: {}", body);
    body["id"].as_i64().expect("employee id")
}

/// Create a task through the API and return its id
pub async fn create_task(router: &Router, title: &str, employee_id: i64, status: &str) -> i64 {
    let (code, body) = send(
        router,
        Method::POST,
        "/tasks",
        Some(serde_json::json!({
            "title": title,
            "status": status,
            "priority": "high",
            "employeeId": employee_id,
        })),
    )
    .await;
    assert_eq!(code, StatusCode::CREATED, "create task: {}", body);
    body["id"].as_i64().expect("task id")
}
