//! Employee domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::task::{Task, TaskResponse};

/// Employee domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i32,
    pub name: String,
    pub role: Option<String>,
    pub department: Option<String>,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Employee creation data
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewEmployee {
    pub name: String,
    pub role: Option<String>,
    pub department: Option<String>,
    pub email: Option<String>,
}

/// Partial employee update; `None` leaves a field unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeChanges {
    pub name: Option<String>,
    pub role: Option<String>,
    pub department: Option<String>,
    pub email: Option<String>,
}

/// Employee response in storage representation
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EmployeeResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Ann Lee")]
    pub name: String,
    #[schema(example = "Engineer")]
    pub role: Option<String>,
    #[schema(example = "Engineering")]
    pub department: Option<String>,
    #[schema(example = "ann.lee@example.com")]
    pub email: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
    /// Tasks assigned to this employee (present on reads)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<TaskResponse>>,
}

impl EmployeeResponse {
    /// Response with the employee's tasks embedded
    pub fn with_tasks(employee: Employee, tasks: Vec<Task>) -> Self {
        Self {
            tasks: Some(tasks.into_iter().map(TaskResponse::from).collect()),
            ..Self::from(employee)
        }
    }
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id,
            name: employee.name,
            role: employee.role,
            department: employee.department,
            email: employee.email,
            created_at: employee.created_at,
            updated_at: employee.updated_at,
            tasks: None,
        }
    }
}
