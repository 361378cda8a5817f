//! Gateway client tests against a live server on an ephemeral port.

mod common;

use taskflow::api::{create_router, AppState};
use taskflow::client::{ClientError, GatewayClient};
use taskflow::config::Config;
use taskflow_core::{EmployeeDraft, TaskDraft, TaskUpdate};

use common::test_database;

async fn spawn_gateway() -> GatewayClient {
    let db = test_database().await;
    let app = create_router(AppState::from_config(db, &Config::default()));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    GatewayClient::new(format!("http://{}", addr))
}

fn ann() -> EmployeeDraft {
    EmployeeDraft {
        name: "Ann Lee".to_string(),
        position: "Engineer".to_string(),
        department: "Engineering".to_string(),
        email: "ann@x.com".to_string(),
        phone: "555-0100".to_string(),
    }
}

#[tokio::test]
async fn test_create_employee_returns_presentation_record() {
    let client = spawn_gateway().await;

    let employee = client.create_employee(&ann()).await.unwrap();

    assert_eq!(employee.name, "Ann Lee");
    assert_eq!(employee.position, "Engineer");
    assert!(!employee.id.is_empty());
    // phone is not stored
    assert_eq!(employee.phone, "");
}

#[tokio::test]
async fn test_task_lifecycle() {
    let client = spawn_gateway().await;
    let employee = client.create_employee(&ann()).await.unwrap();

    let task = client
        .create_task(&TaskDraft {
            title: "Fix bug".to_string(),
            status: "in_progress".to_string(),
            priority: "high".to_string(),
            due_date: Some("2024-05-01".to_string()),
            assigned_to: employee.id.clone(),
        })
        .await
        .unwrap();
    assert_eq!(task.status, "in_progress");
    assert_eq!(task.assigned_to, employee.id);
    assert_eq!(task.due_date.as_deref(), Some("2024-05-01"));

    // Empty fields are not sent, so they stay unchanged
    let updated = client
        .update_task(
            &task.id,
            &TaskUpdate {
                title: Some(String::new()),
                status: Some("completed".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.status, "completed");
    assert_eq!(updated.title, "Fix bug");

    client.delete_task(&task.id).await.unwrap();
    assert!(client.fetch_tasks().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_snapshot_metrics() {
    let client = spawn_gateway().await;
    let employee = client.create_employee(&ann()).await.unwrap();

    for (title, status) in [("A", "completed"), ("B", "pending"), ("C", "completed")] {
        client
            .create_task(&TaskDraft {
                title: title.to_string(),
                status: status.to_string(),
                priority: "medium".to_string(),
                due_date: None,
                assigned_to: employee.id.clone(),
            })
            .await
            .unwrap();
    }

    let snapshot = client.fetch_snapshot().await.unwrap();
    assert_eq!(snapshot.employees.len(), 1);
    assert_eq!(snapshot.tasks.len(), 3);

    let summary = snapshot.summary();
    assert_eq!((summary.completed, summary.pending), (2, 1));
    assert_eq!(summary.completion_rate, 67);
    assert_eq!(snapshot.employee_stats(&employee.id).rate, 67);
}

#[tokio::test]
async fn test_error_mapping() {
    let client = spawn_gateway().await;

    let err = client
        .create_task(&TaskDraft {
            title: "Orphan".to_string(),
            status: "pending".to_string(),
            priority: "low".to_string(),
            due_date: None,
            assigned_to: "404".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Validation(ref msg) if msg == "Employee 404 does not exist"));

    let err = client.delete_task("12345").await.unwrap_err();
    assert!(matches!(err, ClientError::NotFound(ref msg) if msg == "Task not found"));
}

#[tokio::test]
async fn test_unreachable_gateway_is_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = GatewayClient::new(format!("http://{}", addr));
    let err = client.fetch_snapshot().await.unwrap_err();

    assert!(matches!(err, ClientError::Transport(_)));
}
