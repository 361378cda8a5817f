//! Presentation representation - records as views and reports consume them.
//!
//! Identifiers are opaque strings. Status and priority are lowercase
//! snake_case strings; the status set is open, so they are not enums.

use serde::{Deserialize, Serialize};

use crate::constants::STATUS_COMPLETED;

/// Employee as presented.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub name: String,
    /// Job title (stored as `role`)
    pub position: String,
    pub department: String,
    pub email: String,
    /// Not persisted by the gateway
    pub phone: String,
}

/// New-employee form contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeDraft {
    pub name: String,
    pub position: String,
    pub department: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

/// Task as presented.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub status: String,
    pub priority: String,
    pub due_date: Option<String>,
    /// Owning employee's id (stored as `employeeId`)
    pub assigned_to: String,
}

impl Task {
    pub fn is_completed(&self) -> bool {
        self.status == STATUS_COMPLETED
    }
}

/// New-task form contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDraft {
    pub title: String,
    pub status: String,
    pub priority: String,
    #[serde(default)]
    pub due_date: Option<String>,
    pub assigned_to: String,
}

/// Partial task update. `None` and empty strings both mean "leave unchanged".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub due_date: Option<String>,
    pub assigned_to: Option<String>,
}
