//! In-memory filtering and sorting over a loaded snapshot.
//!
//! Results borrow from the input; the input is never reordered or modified.

use std::collections::HashMap;

use crate::constants::{DEPARTMENT_ALL, FILTER_ALL, PRIORITY_HIGH, PRIORITY_LOW, PRIORITY_MEDIUM};
use crate::model::{Employee, Task};

/// Task list filter. `"all"` and an empty search disable their clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskFilter {
    /// Case-insensitive literal substring of the title or assignee name
    pub search: String,
    pub status: String,
    pub priority: String,
}

impl Default for TaskFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            status: FILTER_ALL.to_string(),
            priority: FILTER_ALL.to_string(),
        }
    }
}

/// Employee list filter. `"All"` and an empty search disable their clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeFilter {
    /// Case-insensitive literal substring of name, position or email
    pub search: String,
    pub department: String,
}

impl Default for EmployeeFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            department: DEPARTMENT_ALL.to_string(),
        }
    }
}

pub fn filter_tasks<'a>(
    tasks: &'a [Task],
    employees: &[Employee],
    filter: &TaskFilter,
) -> Vec<&'a Task> {
    // First employee wins on a duplicated id
    let mut by_id: HashMap<&str, &Employee> = HashMap::with_capacity(employees.len());
    for employee in employees {
        by_id.entry(employee.id.as_str()).or_insert(employee);
    }
    let needle = filter.search.to_lowercase();

    tasks
        .iter()
        .filter(|task| {
            needle.is_empty()
                || contains(&task.title, &needle)
                || by_id
                    .get(task.assigned_to.as_str())
                    .is_some_and(|e| contains(&e.name, &needle))
        })
        .filter(|task| filter.status == FILTER_ALL || task.status == filter.status)
        .filter(|task| filter.priority == FILTER_ALL || task.priority == filter.priority)
        .collect()
}

/// Sort rank of a priority: high 0, medium 1, low 2, anything else 3.
pub fn priority_rank(priority: &str) -> u8 {
    match priority {
        PRIORITY_HIGH => 0,
        PRIORITY_MEDIUM => 1,
        PRIORITY_LOW => 2,
        _ => 3,
    }
}

/// Stable sort by priority rank; equal ranks keep their input order.
pub fn sort_by_priority<'a, I>(tasks: I) -> Vec<&'a Task>
where
    I: IntoIterator<Item = &'a Task>,
{
    let mut sorted: Vec<&Task> = tasks.into_iter().collect();
    sorted.sort_by_key(|t| priority_rank(&t.priority));
    sorted
}

pub fn filter_employees<'a>(employees: &'a [Employee], filter: &EmployeeFilter) -> Vec<&'a Employee> {
    let needle = filter.search.to_lowercase();

    employees
        .iter()
        .filter(|e| {
            needle.is_empty()
                || contains(&e.name, &needle)
                || contains(&e.position, &needle)
                || contains(&e.email, &needle)
        })
        .filter(|e| filter.department == DEPARTMENT_ALL || e.department == filter.department)
        .collect()
}

/// Department choices: `"All"` then each distinct non-empty department in
/// first-seen order.
pub fn departments(employees: &[Employee]) -> Vec<String> {
    let mut choices = vec![DEPARTMENT_ALL.to_string()];
    for employee in employees {
        if !employee.department.is_empty() && !choices.contains(&employee.department) {
            choices.push(employee.department.clone());
        }
    }
    choices
}

fn contains(haystack: &str, lowercase_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowercase_needle)
}
