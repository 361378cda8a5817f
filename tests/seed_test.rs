//! Bulk import tests over an in-memory database.

mod common;

use std::io::Write;

use axum::http::{Method, StatusCode};
use serde_json::json;

use taskflow::commands::seed::{read_document, seed_from_file};
use taskflow::commands::serve::build_app;
use taskflow::config::Config;
use taskflow::errors::AppError;
use taskflow::services::{ImportReport, ServiceContainer, Services};

use common::{send, test_app, test_database};

fn document() -> serde_json::Value {
    json!({
        "employees": [
            {
                "id": "a",
                "name": "Ann Lee",
                "role": "Engineer",
                "tasks": [
                    {"title": "Fix bug", "status": "in progress", "priority": "URGENT"},
                    {"name": "Review", "status": "completed", "due_date": "2024-05-01"}
                ]
            },
            {"name": "Bo Chen", "position": "Designer", "department": "Design"}
        ]
    })
}

#[tokio::test]
async fn test_import_normalizes_and_links_tasks() {
    let db = test_database().await;
    let services = Services::from_connection(db.get_connection());

    let report = services.imports().import_document(document()).await.unwrap();
    assert_eq!(report, ImportReport { employees: 2, tasks: 2 });

    let employees = services.employees().list_employees().await.unwrap();
    let (ann, ann_tasks) = &employees[0];
    assert_eq!(ann.name, "Ann Lee");
    assert_eq!(ann.department.as_deref(), Some("Engineering"));
    assert_eq!(ann_tasks.len(), 2);
    assert_eq!(ann_tasks[0].status, "In Progress");
    assert_eq!(ann_tasks[0].priority, "medium");
    assert_eq!(ann_tasks[1].title, "Review");
    assert_eq!(ann_tasks[1].status, "Completed");

    let (bo, bo_tasks) = &employees[1];
    assert_eq!(bo.role.as_deref(), Some("Designer"));
    assert!(bo_tasks.is_empty());
}

#[tokio::test]
async fn test_import_skips_nameless_employees_and_untitled_tasks() {
    let db = test_database().await;
    let services = Services::from_connection(db.get_connection());

    let report = services
        .imports()
        .import_document(json!({"employees": [{"tasks": [{}]}]}))
        .await
        .unwrap();
    assert_eq!(report, ImportReport { employees: 0, tasks: 0 });

    let report = services
        .imports()
        .import_document(json!({
            "employees": [{"id": "a", "name": "Ann Lee", "tasks": [{"status": "completed"}, {"title": "Ship"}]}]
        }))
        .await
        .unwrap();
    assert_eq!(report, ImportReport { employees: 1, tasks: 1 });

    let employees = services.employees().list_employees().await.unwrap();
    assert_eq!(employees.len(), 1);
    assert_eq!(employees[0].1.len(), 1);
    assert_eq!(employees[0].1[0].title, "Ship");
}

#[tokio::test]
async fn test_seed_only_fills_empty_database() {
    let db = test_database().await;
    let imports = Services::from_connection(db.get_connection()).imports();

    let first = imports.seed_if_empty(document()).await.unwrap();
    assert_eq!(first, Some(ImportReport { employees: 2, tasks: 2 }));

    let second = imports.seed_if_empty(document()).await.unwrap();
    assert_eq!(second, None);
}

#[tokio::test]
async fn test_seed_from_file_is_visible_through_api() {
    let (app, db) = test_app().await;

    let (path, mut file) = tempfile_path("seed_visible.json");
    file.write_all(document().to_string().as_bytes()).unwrap();
    drop(file);

    let report = seed_from_file(&db, &path).await.unwrap();
    assert_eq!(report.map(|r| r.employees), Some(2));

    let (status, body) = send(&app, Method::GET, "/tasks?status=Completed", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["employee"]["name"], "Ann Lee");

    std::fs::remove_file(&path).ok();
}

#[tokio::test]
async fn test_startup_survives_missing_seed_file() {
    let db = test_database().await;
    let config = Config {
        seed_file: Some(std::env::temp_dir().join("taskflow-no-such-seed.json")),
        ..Default::default()
    };

    let app = build_app(db, &config).await;

    let (status, body) = send(&app, Method::GET, "/employees", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_startup_survives_invalid_seed_file() {
    let (path, mut file) = tempfile_path("broken_seed.json");
    file.write_all(b"{ not json").unwrap();
    drop(file);

    let db = test_database().await;
    let config = Config {
        seed_file: Some(path.clone()),
        ..Default::default()
    };
    let app = build_app(db, &config).await;

    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    std::fs::remove_file(&path).ok();
}

#[tokio::test]
async fn test_startup_seeds_from_configured_file() {
    let (path, mut file) = tempfile_path("startup_seed.json");
    file.write_all(document().to_string().as_bytes()).unwrap();
    drop(file);

    let db = test_database().await;
    let config = Config {
        seed_file: Some(path.clone()),
        ..Default::default()
    };
    let app = build_app(db, &config).await;

    let (_, body) = send(&app, Method::GET, "/employees", None).await;
    assert_eq!(body.as_array().unwrap().len(), 2);

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_read_document_errors() {
    let missing = std::env::temp_dir().join("taskflow-does-not-exist.json");
    assert!(matches!(read_document(&missing), Err(AppError::BadRequest(_))));

    let (path, mut file) = tempfile_path("not_json.json");
    file.write_all(b"{ not json").unwrap();
    drop(file);
    assert!(matches!(read_document(&path), Err(AppError::BadRequest(_))));
    std::fs::remove_file(&path).ok();
}

#[test]
fn test_sample_data_parses() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("data/employees.json");
    let document = read_document(&path).unwrap();
    let nested = taskflow_core::normalize_nested(&document);

    assert_eq!(nested.employees.len(), 3);
    assert_eq!(nested.tasks.len(), 3);
    // "urgent" is coerced on import
    assert_eq!(nested.tasks[2].priority, "medium");
}

fn tempfile_path(name: &str) -> (std::path::PathBuf, std::fs::File) {
    let path = std::env::temp_dir().join(format!("taskflow-{}-{}", std::process::id(), name));
    let file = std::fs::File::create(&path).unwrap();
    (path, file)
}
