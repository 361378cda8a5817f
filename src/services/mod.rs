//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion, and reach repositories through the Unit of Work.

pub mod container;
mod employee_service;
mod import_service;
mod task_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use employee_service::{EmployeeManager, EmployeeService};
pub use import_service::{ImportReport, ImportService, Importer};
pub use task_service::{TaskManager, TaskService};
