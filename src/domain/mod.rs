//! Domain layer - Gateway entities and transfer objects
//!
//! These are the storage-side shapes: integer identifiers, capitalized
//! statuses and the `role`/`employeeId` field names of the REST contract.
//! Presentation shapes live in `taskflow_core`.

pub mod employee;
pub mod task;

pub use employee::{Employee, EmployeeChanges, EmployeeResponse, NewEmployee};
pub use task::{NewTask, Task, TaskChanges, TaskQuery, TaskResponse};
