//! Schema normalizer - storage <-> presentation mapping.
//!
//! All renaming between the gateway's field names (`role`, `employeeId`,
//! capitalized statuses) and the presentation names (`position`,
//! `assigned_to`, snake_case statuses) happens here and nowhere else.
//!
//! Every function is total: missing or malformed fields become `""`,
//! `"pending"` or `"medium"` rather than errors.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::constants::{
    PRIORITY_MEDIUM, STATUS_COMPLETED, STATUS_IN_PROGRESS, STATUS_PENDING,
    STORAGE_STATUS_COMPLETED, STORAGE_STATUS_IN_PROGRESS, STORAGE_STATUS_PENDING,
};
use crate::lenient;
use crate::model::{Employee, EmployeeDraft, Task, TaskDraft, TaskUpdate};
use crate::storage::{
    NewEmployeePayload, NewTaskPayload, StoredEmployee, StoredTask, TaskPatchPayload,
};

static IN_PROGRESS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^in\s*progress$").expect("in-progress pattern is valid"));

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

// =============================================================================
// Status
// =============================================================================

/// Normalize a raw status to its presentation form.
///
/// `"In Progress"`, `"in   progress"` and `"INPROGRESS"` all become
/// `in_progress`; unrecognized values are lowercased with whitespace runs
/// replaced by `_`. A missing or empty status is `pending`.
pub fn normalize_status(raw: Option<&str>) -> String {
    let Some(raw) = raw.filter(|s| !s.is_empty()) else {
        return STATUS_PENDING.to_string();
    };

    let s = raw.trim();
    if IN_PROGRESS.is_match(s) {
        STATUS_IN_PROGRESS.to_string()
    } else if s.eq_ignore_ascii_case(STATUS_PENDING) {
        STATUS_PENDING.to_string()
    } else if s.eq_ignore_ascii_case(STATUS_COMPLETED) {
        STATUS_COMPLETED.to_string()
    } else {
        WHITESPACE_RUN.replace_all(&s.to_lowercase(), "_").into_owned()
    }
}

/// Map a presentation status back to the storage form.
///
/// Unknown statuses pass through unchanged.
pub fn denormalize_status(status: &str) -> String {
    match status {
        STATUS_IN_PROGRESS => STORAGE_STATUS_IN_PROGRESS.to_string(),
        STATUS_PENDING => STORAGE_STATUS_PENDING.to_string(),
        STATUS_COMPLETED => STORAGE_STATUS_COMPLETED.to_string(),
        other => other.to_string(),
    }
}

// =============================================================================
// Employee
// =============================================================================

pub fn normalize_employee(record: &StoredEmployee) -> Employee {
    Employee {
        id: record.id.clone().unwrap_or_default(),
        name: record.name.clone().unwrap_or_default(),
        position: record.role.clone().unwrap_or_default(),
        department: record.department.clone().unwrap_or_default(),
        email: record.email.clone().unwrap_or_default(),
        phone: record.phone.clone().unwrap_or_default(),
    }
}

/// Build the create payload. `phone` has no storage column and is dropped.
pub fn denormalize_employee(draft: &EmployeeDraft) -> NewEmployeePayload {
    NewEmployeePayload {
        name: draft.name.clone(),
        role: draft.position.clone(),
        department: draft.department.clone(),
        email: draft.email.clone(),
    }
}

/// Normalize a JSON array of stored employees. Non-arrays yield nothing.
pub fn normalize_employees(data: &Value) -> Vec<Employee> {
    data.as_array()
        .map(|items| {
            items
                .iter()
                .map(|item| normalize_employee(&lenient::record(item)))
                .collect()
        })
        .unwrap_or_default()
}

// =============================================================================
// Task
// =============================================================================

pub fn normalize_task(record: &StoredTask) -> Task {
    Task {
        id: record.id.clone().unwrap_or_default(),
        title: record.title.clone().unwrap_or_default(),
        status: normalize_status(record.status.as_deref()),
        priority: record
            .priority
            .as_deref()
            .map(str::to_lowercase)
            .unwrap_or_else(|| PRIORITY_MEDIUM.to_string()),
        due_date: record.due_date.clone(),
        assigned_to: record.employee_id.clone().unwrap_or_default(),
    }
}

/// Build the create payload. Priority is sent as given.
pub fn denormalize_task(draft: &TaskDraft) -> NewTaskPayload {
    NewTaskPayload {
        title: draft.title.clone(),
        status: denormalize_status(&draft.status),
        priority: draft.priority.clone(),
        due_date: draft.due_date.clone(),
        employee_id: parse_leading_int(&draft.assigned_to),
    }
}

/// Build an update payload from the supplied fields only.
///
/// A field set to the empty string is treated the same as an absent one, so
/// an update cannot clear a field. An `assigned_to` that does not parse as an
/// integer is omitted.
pub fn denormalize_task_partial(updates: &TaskUpdate) -> TaskPatchPayload {
    TaskPatchPayload {
        title: supplied(&updates.title).map(str::to_string),
        status: supplied(&updates.status).map(denormalize_status),
        priority: supplied(&updates.priority).map(str::to_string),
        due_date: supplied(&updates.due_date).map(str::to_string),
        employee_id: supplied(&updates.assigned_to).and_then(parse_leading_int),
    }
}

/// Normalize a JSON array of stored tasks. Non-arrays yield nothing.
pub fn normalize_tasks(data: &Value) -> Vec<Task> {
    data.as_array()
        .map(|items| {
            items
                .iter()
                .map(|item| normalize_task(&lenient::record(item)))
                .collect()
        })
        .unwrap_or_default()
}

fn supplied(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Integer-prefix parse: leading whitespace, optional sign, then digits.
/// `"12abc"` is 12; `"abc"` is `None`.
fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let value: i64 = digits[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_round_trip() {
        for status in [STATUS_PENDING, STATUS_IN_PROGRESS, STATUS_COMPLETED] {
            let stored = denormalize_status(status);
            assert_eq!(normalize_status(Some(&stored)), status);
        }
    }

    #[test]
    fn test_status_normalization_ignores_case_and_spacing() {
        assert_eq!(normalize_status(Some("IN    Progress")), "in_progress");
        assert_eq!(normalize_status(Some("inprogress")), "in_progress");
        assert_eq!(normalize_status(Some("  Completed ")), "completed");
        assert_eq!(normalize_status(Some("PENDING")), "pending");
        assert_eq!(normalize_status(None), "pending");
        assert_eq!(normalize_status(Some("")), "pending");
    }

    #[test]
    fn test_unknown_status_is_snake_cased() {
        assert_eq!(normalize_status(Some("On  Hold")), "on_hold");
        assert_eq!(normalize_status(Some(" Blocked by\tQA ")), "blocked_by_qa");
    }

    #[test]
    fn test_unknown_status_denormalizes_unchanged() {
        assert_eq!(denormalize_status("on_hold"), "on_hold");
        assert_eq!(denormalize_status("In Progress"), "In Progress");
    }

    #[test]
    fn test_end_to_end_normalization() {
        let employee: StoredEmployee = serde_json::from_value(json!({
            "id": 1,
            "name": "Ann Lee",
            "role": "Engineer",
            "department": "Engineering",
            "email": "a@x.com"
        }))
        .unwrap();
        let task: StoredTask = serde_json::from_value(json!({
            "id": 10,
            "title": "Fix bug",
            "status": "In Progress",
            "priority": "HIGH",
            "due_date": "2024-05-01",
            "employeeId": 1
        }))
        .unwrap();

        assert_eq!(
            normalize_employee(&employee),
            Employee {
                id: "1".to_string(),
                name: "Ann Lee".to_string(),
                position: "Engineer".to_string(),
                department: "Engineering".to_string(),
                email: "a@x.com".to_string(),
                phone: String::new(),
            }
        );
        assert_eq!(
            normalize_task(&task),
            Task {
                id: "10".to_string(),
                title: "Fix bug".to_string(),
                status: "in_progress".to_string(),
                priority: "high".to_string(),
                due_date: Some("2024-05-01".to_string()),
                assigned_to: "1".to_string(),
            }
        );
    }

    #[test]
    fn test_malformed_task_uses_defaults() {
        let task: StoredTask = serde_json::from_value(json!({
            "id": null,
            "title": ["not", "a", "string"],
            "employeeId": {"nested": true}
        }))
        .unwrap();

        let normalized = normalize_task(&task);
        assert_eq!(normalized.id, "");
        assert_eq!(normalized.title, "");
        assert_eq!(normalized.status, "pending");
        assert_eq!(normalized.priority, "medium");
        assert_eq!(normalized.assigned_to, "");
        assert_eq!(normalized.due_date, None);
    }

    #[test]
    fn test_malformed_record_does_not_abort_batch() {
        let data = json!([
            {"id": 1, "title": "First", "status": "Pending", "priority": "low", "employeeId": 2},
            "garbage",
            42,
            {"id": "3", "title": "Third", "status": "Completed", "priority": "Medium", "employeeId": "2"}
        ]);

        let tasks = normalize_tasks(&data);
        assert_eq!(tasks.len(), 4);
        assert_eq!(tasks[0].title, "First");
        assert_eq!(tasks[1], normalize_task(&StoredTask::default()));
        assert_eq!(tasks[3].priority, "medium");
        assert_eq!(tasks[3].assigned_to, "2");
    }

    #[test]
    fn test_normalize_employees_reads_embedded_tasks_leniently() {
        let data = json!([
            {"id": 5, "name": "Bo", "role": null, "tasks": [{"id": 1}, "bad"]},
        ]);

        let record: StoredEmployee = lenient::record(&data[0]);
        assert_eq!(record.tasks.len(), 2);

        let employees = normalize_employees(&data);
        assert_eq!(employees[0].id, "5");
        assert_eq!(employees[0].position, "");
        assert!(normalize_employees(&json!({"not": "an array"})).is_empty());
    }

    #[test]
    fn test_denormalize_employee_drops_phone() {
        let draft = EmployeeDraft {
            name: "Ann Lee".to_string(),
            position: "Engineer".to_string(),
            department: "Engineering".to_string(),
            email: "a@x.com".to_string(),
            phone: "555-0100".to_string(),
        };

        let payload = denormalize_employee(&draft);
        assert_eq!(payload.role, "Engineer");
        let body = serde_json::to_value(&payload).unwrap();
        assert!(body.get("phone").is_none());
        assert!(body.get("position").is_none());
    }

    #[test]
    fn test_denormalize_task_maps_fields() {
        let draft = TaskDraft {
            title: "Write docs".to_string(),
            status: "in_progress".to_string(),
            priority: "urgent".to_string(),
            due_date: Some("2024-06-01".to_string()),
            assigned_to: "7".to_string(),
        };

        let body = serde_json::to_value(denormalize_task(&draft)).unwrap();
        assert_eq!(
            body,
            json!({
                "title": "Write docs",
                "status": "In Progress",
                "priority": "urgent",
                "due_date": "2024-06-01",
                "employeeId": 7
            })
        );
    }

    #[test]
    fn test_denormalize_task_with_unparsable_assignee_sends_null() {
        let draft = TaskDraft {
            title: "Orphan".to_string(),
            assigned_to: "nobody".to_string(),
            ..Default::default()
        };

        let body = serde_json::to_value(denormalize_task(&draft)).unwrap();
        assert_eq!(body["employeeId"], Value::Null);
    }

    #[test]
    fn test_partial_update_omits_empty_fields() {
        let updates = TaskUpdate {
            status: Some(String::new()),
            priority: Some("low".to_string()),
            ..Default::default()
        };

        let body = serde_json::to_value(denormalize_task_partial(&updates)).unwrap();
        assert_eq!(body, json!({"priority": "low"}));
    }

    #[test]
    fn test_partial_update_denormalizes_status_and_assignee() {
        let updates = TaskUpdate {
            status: Some("completed".to_string()),
            assigned_to: Some("12".to_string()),
            ..Default::default()
        };

        let payload = denormalize_task_partial(&updates);
        assert_eq!(payload.status.as_deref(), Some("Completed"));
        assert_eq!(payload.employee_id, Some(12));
        assert!(payload.title.is_none());
        assert!(denormalize_task_partial(&TaskUpdate::default()).is_empty());
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("42"), Some(42));
        assert_eq!(parse_leading_int("  12abc"), Some(12));
        assert_eq!(parse_leading_int("-3"), Some(-3));
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int(""), None);
    }
}
