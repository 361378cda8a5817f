//! Storage representation - records and payloads as the gateway speaks them.
//!
//! Stored records are read leniently: identifiers and other scalars arrive as
//! numbers or strings and are kept as strings, missing or malformed fields
//! read as `None`. Payloads are what the gateway accepts on writes.

use serde::{Deserialize, Serialize};

/// Employee as returned by the gateway.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StoredEmployee {
    #[serde(default, deserialize_with = "crate::lenient::string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "crate::lenient::string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "crate::lenient::string")]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "crate::lenient::string")]
    pub department: Option<String>,
    #[serde(default, deserialize_with = "crate::lenient::string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "crate::lenient::string")]
    pub phone: Option<String>,
    /// Embedded tasks (present on employee reads)
    #[serde(default, deserialize_with = "crate::lenient::records")]
    pub tasks: Vec<StoredTask>,
}

/// Task as returned by the gateway.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StoredTask {
    #[serde(default, deserialize_with = "crate::lenient::string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "crate::lenient::string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "crate::lenient::string")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "crate::lenient::string")]
    pub priority: Option<String>,
    #[serde(default, deserialize_with = "crate::lenient::string")]
    pub due_date: Option<String>,
    #[serde(
        rename = "employeeId",
        default,
        deserialize_with = "crate::lenient::string"
    )]
    pub employee_id: Option<String>,
}

/// Body of `POST /employees`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEmployeePayload {
    pub name: String,
    pub role: String,
    pub department: String,
    pub email: String,
}

/// Body of `POST /tasks`.
///
/// `employee_id` is `None` when the presentation identifier did not parse as
/// an integer; it is sent as `null` and the gateway rejects it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTaskPayload {
    pub title: String,
    pub status: String,
    pub priority: String,
    pub due_date: Option<String>,
    #[serde(rename = "employeeId")]
    pub employee_id: Option<i64>,
}

/// Body of `PUT /tasks/:id`. Only supplied fields are serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPatchPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(
        rename = "employeeId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub employee_id: Option<i64>,
}

impl TaskPatchPayload {
    /// True when no field would be sent.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.status.is_none()
            && self.priority.is_none()
            && self.due_date.is_none()
            && self.employee_id.is_none()
    }
}
