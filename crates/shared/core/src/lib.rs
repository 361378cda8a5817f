//! TaskFlow core - Pure record mapping, metrics and query logic.
//!
//! This crate has no I/O and no infrastructure dependencies. Every function
//! takes an immutable snapshot and returns a newly derived value.
//!
//! # Modules
//!
//! - **normalize**: storage <-> presentation field and value mapping
//! - **import**: nested bulk-import documents -> flat presentation collections
//! - **metrics**: status counts and completion rates
//! - **query**: in-memory filtering and priority sorting
//! - **model** / **storage**: the two record shapes

pub mod constants;
pub mod import;
mod lenient;
pub mod metrics;
pub mod model;
pub mod normalize;
pub mod query;
pub mod storage;

pub use constants::*;
pub use import::{normalize_nested, NestedImport};
pub use metrics::{
    completion_rate, count_by_status, employee_stats, summarize, EmployeeStats, StatusCounts,
    TaskSummary,
};
pub use model::{Employee, EmployeeDraft, Task, TaskDraft, TaskUpdate};
pub use normalize::{
    denormalize_employee, denormalize_status, denormalize_task, denormalize_task_partial,
    normalize_employee, normalize_employees, normalize_status, normalize_task, normalize_tasks,
};
pub use query::{
    departments, filter_employees, filter_tasks, priority_rank, sort_by_priority, EmployeeFilter,
    TaskFilter,
};
pub use storage::{NewEmployeePayload, NewTaskPayload, StoredEmployee, StoredTask, TaskPatchPayload};
