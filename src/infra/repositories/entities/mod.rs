//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod employee;
pub mod task;

pub use employee::Entity as EmployeeEntity;
