//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

pub(crate) mod entities;
mod employee_repository;
mod task_repository;

pub use employee_repository::{EmployeeRepository, EmployeeStore};
pub use task_repository::{TaskRepository, TaskStore};

pub(crate) use employee_repository::insert_employee;
pub(crate) use task_repository::insert_task;

#[cfg(test)]
pub use employee_repository::MockEmployeeRepository;
#[cfg(test)]
pub use task_repository::MockTaskRepository;
