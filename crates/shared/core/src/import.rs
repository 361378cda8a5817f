//! Bulk import of nested `{ "employees": [{ ..., "tasks": [...] }] }` documents.
//!
//! Unlike the single-record path in [`crate::normalize`], import coerces any
//! priority outside `low`/`medium`/`high` to `medium`.

use serde_json::Value;

use crate::constants::{is_valid_priority, DEFAULT_DEPARTMENT, PRIORITY_MEDIUM};
use crate::lenient::field;
use crate::model::{Employee, Task};
use crate::normalize::normalize_status;

/// Flattened result of a bulk import.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NestedImport {
    pub employees: Vec<Employee>,
    /// Tasks of all employees, in document order; `assigned_to` links them.
    pub tasks: Vec<Task>,
}

impl NestedImport {
    /// Tasks imported for the given employee id.
    pub fn tasks_for<'a>(&'a self, employee_id: &'a str) -> impl Iterator<Item = &'a Task> + 'a {
        self.tasks.iter().filter(move |t| t.assigned_to == employee_id)
    }
}

/// Flatten a nested import document.
///
/// Employees without an id get `import-<n>` (1-based position); tasks without
/// an id get `<employee id>-<n>` (1-based within the employee).
pub fn normalize_nested(data: &Value) -> NestedImport {
    let Some(raw_employees) = data.get("employees").and_then(Value::as_array) else {
        return NestedImport::default();
    };

    let mut import = NestedImport::default();

    for (index, raw) in raw_employees.iter().enumerate() {
        let employee = Employee {
            id: field(raw, "id").unwrap_or_else(|| format!("import-{}", index + 1)),
            name: field(raw, "name").unwrap_or_default(),
            position: field(raw, "role")
                .or_else(|| field(raw, "position"))
                .unwrap_or_default(),
            department: field(raw, "department")
                .unwrap_or_else(|| DEFAULT_DEPARTMENT.to_string()),
            email: field(raw, "email").unwrap_or_default(),
            phone: field(raw, "phone").unwrap_or_default(),
        };

        let raw_tasks = raw.get("tasks").and_then(Value::as_array);
        for (n, raw_task) in raw_tasks.into_iter().flatten().enumerate() {
            import.tasks.push(Task {
                id: field(raw_task, "id").unwrap_or_else(|| format!("{}-{}", employee.id, n + 1)),
                title: field(raw_task, "title")
                    .or_else(|| field(raw_task, "name"))
                    .unwrap_or_default(),
                status: normalize_status(field(raw_task, "status").as_deref()),
                priority: coerce_priority(field(raw_task, "priority").as_deref()),
                due_date: field(raw_task, "due_date"),
                assigned_to: employee.id.clone(),
            });
        }

        import.employees.push(employee);
    }

    import
}

/// Trim and lowercase a priority, replacing anything unknown with `medium`.
pub fn coerce_priority(raw: Option<&str>) -> String {
    let priority = raw.unwrap_or(PRIORITY_MEDIUM).trim().to_lowercase();
    if is_valid_priority(&priority) {
        priority
    } else {
        PRIORITY_MEDIUM.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize_task;
    use crate::storage::StoredTask;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "employees": [
                {
                    "id": 1,
                    "name": "Ann Lee",
                    "role": "Engineer",
                    "department": "Engineering",
                    "email": "a@x.com",
                    "tasks": [
                        {"id": 100, "title": "Fix bug", "status": "In  Progress", "priority": " HIGH "},
                        {"name": "Review PR", "priority": "urgent", "due_date": "2024-05-01"}
                    ]
                },
                {
                    "name": "Bo Chen",
                    "position": "Designer",
                    "tasks": [{"title": "Mockups", "status": "Completed"}]
                }
            ]
        })
    }

    #[test]
    fn test_flattens_employees_and_tasks() {
        let import = normalize_nested(&sample());

        assert_eq!(import.employees.len(), 2);
        assert_eq!(import.tasks.len(), 3);
        assert_eq!(import.tasks_for("1").count(), 2);
        assert_eq!(import.tasks_for("import-2").count(), 1);
    }

    #[test]
    fn test_applies_defaults() {
        let import = normalize_nested(&sample());
        let bo = &import.employees[1];

        assert_eq!(bo.id, "import-2");
        assert_eq!(bo.position, "Designer");
        assert_eq!(bo.department, "Engineering");
        assert_eq!(bo.email, "");

        let review = &import.tasks[1];
        assert_eq!(review.id, "1-2");
        assert_eq!(review.title, "Review PR");
        assert_eq!(review.status, "pending");
        assert_eq!(review.due_date.as_deref(), Some("2024-05-01"));
    }

    #[test]
    fn test_normalizes_status_and_priority() {
        let import = normalize_nested(&sample());

        assert_eq!(import.tasks[0].status, "in_progress");
        assert_eq!(import.tasks[0].priority, "high");
        assert_eq!(import.tasks[2].status, "completed");
        assert_eq!(import.tasks[2].priority, "medium");
    }

    #[test]
    fn test_priority_coercion_only_on_import() {
        let import = normalize_nested(&sample());
        assert_eq!(import.tasks[1].priority, "medium");

        let single = normalize_task(&StoredTask {
            priority: Some("URGENT".to_string()),
            ..Default::default()
        });
        assert_eq!(single.priority, "urgent");
    }

    #[test]
    fn test_missing_employees_array_yields_empty_import() {
        assert_eq!(normalize_nested(&json!({})), NestedImport::default());
        assert_eq!(normalize_nested(&json!({"employees": "nope"})), NestedImport::default());
        assert_eq!(normalize_nested(&Value::Null), NestedImport::default());
    }

    #[test]
    fn test_coerce_priority() {
        assert_eq!(coerce_priority(None), "medium");
        assert_eq!(coerce_priority(Some(" Low ")), "low");
        assert_eq!(coerce_priority(Some("critical")), "medium");
    }
}
