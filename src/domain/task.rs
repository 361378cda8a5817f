//! Task domain entity and related types.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::employee::{Employee, EmployeeResponse};

/// Task domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i32,
    pub title: String,
    /// Storage status, e.g. "In Progress"
    pub status: String,
    pub priority: String,
    pub due_date: Option<NaiveDate>,
    pub employee_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Task creation data. Status and priority fall back to store defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub employee_id: i32,
}

/// Partial task update; `None` leaves a field unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskChanges {
    pub title: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub employee_id: Option<i32>,
}

/// Server-side list filters (exact match on storage values)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskQuery {
    pub status: Option<String>,
    pub employee_id: Option<i32>,
}

/// Task response in storage representation
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TaskResponse {
    #[schema(example = 10)]
    pub id: i32,
    #[schema(example = "Fix bug")]
    pub title: String,
    #[schema(example = "In Progress")]
    pub status: String,
    #[schema(example = "high")]
    pub priority: String,
    #[schema(value_type = Option<String>, example = "2024-05-01")]
    pub due_date: Option<NaiveDate>,
    #[serde(rename = "employeeId")]
    #[schema(example = 1)]
    pub employee_id: i32,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
    /// Assigned employee (present on list reads)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee: Option<Box<EmployeeResponse>>,
}

impl TaskResponse {
    /// Response with the assigned employee embedded
    pub fn with_employee(task: Task, employee: Option<Employee>) -> Self {
        Self {
            employee: employee.map(|e| Box::new(EmployeeResponse::from(e))),
            ..Self::from(task)
        }
    }
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            title: task.title,
            status: task.status,
            priority: task.priority,
            due_date: task.due_date,
            employee_id: task.employee_id,
            created_at: task.created_at,
            updated_at: task.updated_at,
            employee: None,
        }
    }
}
