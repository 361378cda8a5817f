//! Report command - Prints a dashboard report from a running gateway.

use taskflow_core::{
    departments, filter_employees, filter_tasks, sort_by_priority, EmployeeFilter, TaskFilter,
};

use crate::cli::args::ReportArgs;
use crate::client::{GatewayClient, Snapshot};
use crate::errors::AppResult;

/// Execute the report command
pub async fn execute(args: ReportArgs) -> AppResult<()> {
    let client = GatewayClient::new(args.url.as_str());
    tracing::debug!(url = %client.base_url(), "Loading snapshot");

    let snapshot = client.fetch_snapshot().await?;
    print!("{}", render(&snapshot, &args));

    Ok(())
}

/// Render totals, per-employee progress and the filtered task list.
pub fn render(snapshot: &Snapshot, args: &ReportArgs) -> String {
    let summary = snapshot.summary();
    let mut out = format!(
        "Tasks: {} total, {} pending, {} in progress, {} completed ({}% complete)\n",
        summary.total, summary.pending, summary.in_progress, summary.completed, summary.completion_rate
    );
    out.push_str(&format!(
        "Departments: {}\n",
        departments(&snapshot.employees).join(", ")
    ));

    let employee_filter = EmployeeFilter {
        search: args.search.clone(),
        department: args.department.clone(),
    };
    let employees = filter_employees(&snapshot.employees, &employee_filter);

    out.push_str(&format!("\nEmployees ({})\n", employees.len()));
    for employee in &employees {
        let stats = snapshot.employee_stats(&employee.id);
        out.push_str(&format!(
            "  {:<24} {:<16} {:>3}/{:<3} {:>3}%\n",
            employee.name, employee.department, stats.completed, stats.total, stats.rate
        ));
    }

    let task_filter = TaskFilter {
        search: args.search.clone(),
        status: args.status.clone(),
        priority: args.priority.clone(),
    };
    let matching = filter_tasks(&snapshot.tasks, &snapshot.employees, &task_filter)
        .into_iter()
        .filter(|task| {
            args.employee
                .as_deref()
                .map_or(true, |id| task.assigned_to == id)
        });
    let tasks = sort_by_priority(matching);

    out.push_str(&format!("\nTasks ({})\n", tasks.len()));
    for task in tasks {
        let assignee = snapshot
            .employees
            .iter()
            .find(|e| e.id == task.assigned_to)
            .map_or("-", |e| e.name.as_str());
        out.push_str(&format!(
            "  [{:<6}] {:<32} {:<12} {}",
            task.priority, task.title, task.status, assignee
        ));
        if let Some(due) = task.due_date.as_deref().filter(|d| !d.is_empty()) {
            out.push_str(&format!(" (due {})", due));
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskflow_core::{Employee, Task};

    fn employee(id: &str, name: &str, department: &str) -> Employee {
        Employee {
            id: id.to_string(),
            name: name.to_string(),
            department: department.to_string(),
            ..Default::default()
        }
    }

    fn task(id: &str, title: &str, status: &str, priority: &str, owner: &str) -> Task {
        Task {
            id: id.to_string(),
            title: title.to_string(),
            status: status.to_string(),
            priority: priority.to_string(),
            due_date: None,
            assigned_to: owner.to_string(),
        }
    }

    fn args() -> ReportArgs {
        ReportArgs {
            url: "http://localhost:3000".to_string(),
            search: String::new(),
            status: "all".to_string(),
            priority: "all".to_string(),
            department: "All".to_string(),
            employee: None,
        }
    }

    fn snapshot() -> Snapshot {
        Snapshot {
            employees: vec![
                employee("1", "Ann Lee", "Engineering"),
                employee("2", "Bo Chen", "Design"),
            ],
            tasks: vec![
                task("10", "Write docs", "pending", "low", "1"),
                task("11", "Fix login", "completed", "high", "1"),
                task("12", "Mockups", "in_progress", "medium", "2"),
            ],
        }
    }

    #[test]
    fn test_render_totals_and_order() {
        let out = render(&snapshot(), &args());

        assert!(out.starts_with(
            "Tasks: 3 total, 1 pending, 1 in progress, 1 completed (33% complete)"
        ));
        let fix = out.find("Fix login").unwrap();
        let mockups = out.find("Mockups").unwrap();
        let docs = out.find("Write docs").unwrap();
        assert!(fix < mockups && mockups < docs);
        assert!(out.contains("Departments: All, Engineering, Design"));
    }

    #[test]
    fn test_render_filters_by_employee_and_department() {
        let report_args = ReportArgs {
            department: "Design".to_string(),
            employee: Some("1".to_string()),
            ..args()
        };
        let out = render(&snapshot(), &report_args);

        assert!(out.contains("Employees (1)"));
        assert!(out.contains("Bo Chen"));
        assert!(out.contains("Tasks (2)"));
        assert!(!out.contains("Mockups"));
    }

    #[test]
    fn test_render_lines_and_due_date() {
        let mut data = snapshot();
        data.tasks[0].due_date = Some("2024-05-01".to_string());
        let out = render(&data, &args());

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[1], "Departments: All, Engineering, Design");
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "Employees (2)");
        assert!(out.ends_with("Write docs                       pending      Ann Lee (due 2024-05-01)\n"));
    }

    #[test]
    fn test_render_search_matches_assignee_name() {
        let report_args = ReportArgs {
            search: "bo".to_string(),
            ..args()
        };
        let out = render(&snapshot(), &report_args);

        assert!(out.contains("Tasks (1)"));
        assert!(out.contains("Mockups"));
    }
}
